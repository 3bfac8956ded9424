use std::fmt;

use serde::Deserialize;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a T8 server.
///
/// Passed explicitly to [`T8Client::new`](super::T8Client::new); nothing is
/// read from the environment by the library itself.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the T8 API, scheme included (e.g. `https://t8.example.com/t8_api`)
    pub host: String,
    /// User name for basic authentication
    pub user: String,
    /// Password for basic authentication
    pub password: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Create a configuration with the default timeout
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Host with any trailing slashes removed
    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
