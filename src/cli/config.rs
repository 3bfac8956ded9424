//! TOML configuration file support.
//!
//! Connection settings can live in a config file instead of flags or
//! environment variables:
//!
//! ```toml
//! # t8.toml
//! [server]
//! host = "https://t8.example.com/t8_api"
//! user = "admin"
//! password = "secret"
//! timeout_secs = 30
//!
//! [plot]
//! width = 1200
//! height = 600
//! ```
//!
//! Values given on the command line (or through `T8_HOST`, `T8_USER`,
//! `T8_PASSWORD`) take precedence over the file.

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::path::Path;

use t8_client::client::ClientConfig;

/// Root configuration structure for t8.toml files.
#[derive(Default, Deserialize)]
pub struct Config {
    /// Server connection settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Plot output settings.
    #[serde(default)]
    #[cfg_attr(not(feature = "plot"), allow(dead_code))]
    pub plot: PlotConfig,
}

/// Connection settings for the T8 server.
#[derive(Default, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the T8 API.
    pub host: Option<String>,

    /// User name for basic authentication.
    pub user: Option<String>,

    /// Password for basic authentication.
    pub password: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Size of rendered plots.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(not(feature = "plot"), allow(dead_code))]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: Option<u32>,

    /// Image height in pixels.
    pub height: Option<u32>,
}

/// Connection values given on the command line or through the environment.
#[derive(Debug, Default)]
pub struct ConnectionOverrides {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Merge command-line values over the file and build the client settings.
    pub fn client_config(self, overrides: ConnectionOverrides) -> Result<ClientConfig> {
        let server = self.server;

        let host = overrides.host.or(server.host).context(
            "No T8 host configured: pass --host, set T8_HOST or add [server] host to the config file",
        )?;
        let user = overrides.user.or(server.user).unwrap_or_else(|| {
            warn!("No T8 user configured, sending an empty user name");
            String::new()
        });
        let password = overrides.password.or(server.password).unwrap_or_default();

        let mut config = ClientConfig::new(host, user, password);
        if let Some(timeout_secs) = overrides.timeout_secs.or(server.timeout_secs) {
            config = config.with_timeout_secs(timeout_secs);
        }
        Ok(config)
    }
}
