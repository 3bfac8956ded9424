//! Wire records of the T8 REST API and the measurement address

use serde::Deserialize;

use super::error::ClientError;
use crate::payload::{self, DecodeError};
use crate::signal::{Spectrum, Waveform};

/// Kind of measurement series on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    /// Time-domain waveforms (`rest/waves`)
    Wave,
    /// Frequency-domain spectra (`rest/spectra`)
    Spectrum,
}

impl MeasurementKind {
    /// Collection name used in REST paths
    pub fn collection(&self) -> &'static str {
        match self {
            MeasurementKind::Wave => "waves",
            MeasurementKind::Spectrum => "spectra",
        }
    }
}

/// Machine, point and processing mode tags addressing one measurement series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementId {
    /// Machine tag
    pub machine: String,
    /// Measurement point tag
    pub point: String,
    /// Processing mode tag
    pub pmode: String,
}

impl MeasurementId {
    /// Create a new measurement address
    pub fn new(
        machine: impl Into<String>,
        point: impl Into<String>,
        pmode: impl Into<String>,
    ) -> Self {
        Self {
            machine: machine.into(),
            point: point.into(),
            pmode: pmode.into(),
        }
    }

    /// REST path below the host, e.g. `rest/waves/M1/P1/AM1[/ts]`
    pub fn path(
        &self,
        kind: MeasurementKind,
        timestamp: Option<i64>,
    ) -> Result<String, ClientError> {
        for tag in [&self.machine, &self.point, &self.pmode] {
            if tag.is_empty() || tag.contains('/') {
                return Err(ClientError::InvalidTag(tag.clone()));
            }
        }

        let mut path = format!(
            "rest/{}/{}/{}/{}",
            kind.collection(),
            self.machine,
            self.point,
            self.pmode
        );
        if let Some(ts) = timestamp {
            path.push_str(&format!("/{}", ts));
        }
        Ok(path)
    }
}

/// Listing of available measurements
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    /// One entry per stored measurement
    #[serde(rename = "_items")]
    pub items: Vec<ListingItem>,
}

/// Entry of a [`Listing`]
#[derive(Debug, Clone, Deserialize)]
pub struct ListingItem {
    /// Hypermedia links of the entry
    #[serde(rename = "_links")]
    pub links: ItemLinks,
}

/// Links of a [`ListingItem`]
#[derive(Debug, Clone, Deserialize)]
pub struct ItemLinks {
    /// URL of the measurement itself; its last segment is the timestamp
    #[serde(rename = "self")]
    pub self_link: String,
}

impl Listing {
    /// Timestamps of the listed measurements in server order, skipping `0`
    pub fn timestamps(&self) -> Result<Vec<i64>, ClientError> {
        let mut timestamps = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let link = item.links.self_link.trim_end_matches('/');
            let segment = link.rsplit('/').next().unwrap_or(link);
            let ts: i64 = segment.parse().map_err(|_| {
                ClientError::InvalidResponse(format!(
                    "link '{}' does not end with a timestamp",
                    item.links.self_link
                ))
            })?;
            if ts != 0 {
                timestamps.push(ts);
            }
        }
        Ok(timestamps)
    }
}

/// Waveform record returned by `rest/waves/.../{ts}`
#[derive(Debug, Clone, Deserialize)]
pub struct WaveRecord {
    /// Encoded payload
    pub data: String,
    /// Scale factor from raw codes to physical units
    pub factor: f64,
    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl WaveRecord {
    /// Decode and calibrate the payload
    pub fn into_waveform(self, timestamp: i64) -> Result<Waveform, DecodeError> {
        let samples = payload::decode(&self.data)?;
        Ok(Waveform::new(
            timestamp,
            self.sample_rate,
            payload::calibrate(&samples, self.factor),
        ))
    }
}

/// Spectrum record returned by `rest/spectra/.../{ts}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpectrumRecord {
    /// Encoded payload
    pub data: String,
    /// Scale factor from raw codes to physical units
    pub factor: f64,
    /// Frequency of the first bin in Hz
    #[serde(default)]
    pub min_freq: f64,
    /// Frequency of the last bin in Hz
    pub max_freq: f64,
}

impl SpectrumRecord {
    /// Decode and calibrate the payload
    pub fn into_spectrum(self, timestamp: i64) -> Result<Spectrum, DecodeError> {
        let bins = payload::decode(&self.data)?;
        Ok(Spectrum::new(
            timestamp,
            self.min_freq,
            self.max_freq,
            payload::calibrate(&bins, self.factor),
        ))
    }
}
