use std::io::Read;
use std::time::Duration;

use base64::prelude::*;
use log::{debug, info};
use serde::de::DeserializeOwned;

use super::config::ClientConfig;
use super::error::ClientError;
use super::models::{Listing, MeasurementId, MeasurementKind, SpectrumRecord, WaveRecord};
use crate::signal::{Spectrum, Waveform};
use crate::timestamp;

/// Blocking client for the T8 REST API
pub struct T8Client {
    config: ClientConfig,
    authorization: String,
    agent: ureq::Agent,
}

impl T8Client {
    /// Create a client from explicit connection settings
    pub fn new(config: ClientConfig) -> Self {
        let credentials = format!("{}:{}", config.user, config.password);
        let authorization = format!("Basic {}", BASE64_STANDARD.encode(credentials));
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();

        Self {
            config,
            authorization,
            agent,
        }
    }

    /// Connection settings in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of a listing or of a single measurement
    pub fn url(
        &self,
        kind: MeasurementKind,
        id: &MeasurementId,
        timestamp: Option<i64>,
    ) -> Result<String, ClientError> {
        Ok(format!(
            "{}/{}",
            self.config.base_url(),
            id.path(kind, timestamp)?
        ))
    }

    /// Timestamps of the stored waveforms, in server order
    pub fn list_waves(&self, id: &MeasurementId) -> Result<Vec<i64>, ClientError> {
        self.list(MeasurementKind::Wave, id)
    }

    /// Timestamps of the stored spectra, in server order
    pub fn list_spectra(&self, id: &MeasurementId) -> Result<Vec<i64>, ClientError> {
        self.list(MeasurementKind::Spectrum, id)
    }

    fn list(&self, kind: MeasurementKind, id: &MeasurementId) -> Result<Vec<i64>, ClientError> {
        let url = self.url(kind, id, None)?;
        let listing: Listing = self.get_json(&url)?;
        let timestamps = listing.timestamps()?;
        info!("Found {} {} at {}", timestamps.len(), kind.collection(), url);
        Ok(timestamps)
    }

    /// Fetch and calibrate the waveform acquired at `timestamp`
    pub fn get_wave(&self, id: &MeasurementId, timestamp: i64) -> Result<Waveform, ClientError> {
        let url = self.url(MeasurementKind::Wave, id, Some(timestamp))?;
        let record: WaveRecord = self.get_json(&url)?;
        let waveform = record.into_waveform(timestamp)?;
        info!(
            "Fetched waveform: {} samples at {} Hz",
            waveform.len(),
            waveform.sample_rate
        );
        Ok(waveform)
    }

    /// Fetch the waveform acquired at an ISO-8601 time (UTC when no offset is given)
    pub fn get_wave_at(&self, id: &MeasurementId, iso: &str) -> Result<Waveform, ClientError> {
        self.get_wave(id, timestamp::to_unix(iso)?)
    }

    /// Fetch and calibrate the spectrum acquired at `timestamp`
    pub fn get_spectrum(
        &self,
        id: &MeasurementId,
        timestamp: i64,
    ) -> Result<Spectrum, ClientError> {
        let url = self.url(MeasurementKind::Spectrum, id, Some(timestamp))?;
        let record: SpectrumRecord = self.get_json(&url)?;
        let spectrum = record.into_spectrum(timestamp)?;
        info!(
            "Fetched spectrum: {} bins from {} to {} Hz",
            spectrum.len(),
            spectrum.min_freq,
            spectrum.max_freq
        );
        Ok(spectrum)
    }

    /// Fetch the spectrum acquired at an ISO-8601 time (UTC when no offset is given)
    pub fn get_spectrum_at(&self, id: &MeasurementId, iso: &str) -> Result<Spectrum, ClientError> {
        self.get_spectrum(id, timestamp::to_unix(iso)?)
    }

    /// Authenticated GET, failing on any non-success status
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        debug!("GET {}", url);

        let response = match self
            .agent
            .get(url)
            .set("Authorization", &self.authorization)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(ClientError::Status {
                    url: url.to_string(),
                    status,
                    body,
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ClientError::TransportError(Box::new(transport)));
            }
        };

        // into_string() caps bodies at 10 MB; long waveforms can exceed that
        let mut body = String::new();
        response.into_reader().read_to_string(&mut body)?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_client_is_send_sync() {
        assert_send_sync::<T8Client>();
    }

    #[test]
    fn test_authorization_header() {
        let client = T8Client::new(ClientConfig::new("http://t8", "user", "pass"));

        assert_eq!(client.authorization, "Basic dXNlcjpwYXNz");
    }
}
