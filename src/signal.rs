//! Calibrated measurement signals
//!
//! A [`Waveform`] is a time-domain signal sampled at a fixed rate; a
//! [`Spectrum`] is a frequency-domain signal whose bins are spread linearly
//! between `min_freq` and `max_freq`. Both carry the T8 timestamp they were
//! acquired at.

use serde::Serialize;

use crate::timestamp::{self, TimestampError};

/// Time-domain calibrated signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform {
    /// Acquisition time (seconds since the Unix epoch, UTC)
    pub timestamp: i64,
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Calibrated samples in acquisition order
    pub samples: Vec<f64>,
}

impl Waveform {
    /// Create a new waveform
    pub fn new(timestamp: i64, sample_rate: f64, samples: Vec<f64>) -> Self {
        Self {
            timestamp,
            sample_rate,
            samples,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the waveform holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the record in seconds (0 when the sample rate is unusable)
    pub fn duration(&self) -> f64 {
        if self.sample_rate > 0.0 {
            self.samples.len() as f64 / self.sample_rate
        } else {
            0.0
        }
    }

    /// Time of each sample relative to the start of the record, in seconds
    pub fn time_axis(&self) -> Vec<f64> {
        if self.sample_rate <= 0.0 {
            return (0..self.samples.len()).map(|i| i as f64).collect();
        }
        (0..self.samples.len())
            .map(|i| i as f64 / self.sample_rate)
            .collect()
    }

    /// Acquisition time as `YYYY-MM-DDTHH:MM:SS`
    pub fn iso_timestamp(&self) -> Result<String, TimestampError> {
        timestamp::to_iso(self.timestamp)
    }
}

/// Frequency-domain calibrated signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    /// Acquisition time (seconds since the Unix epoch, UTC)
    pub timestamp: i64,
    /// Frequency of the first bin in Hz
    pub min_freq: f64,
    /// Frequency of the last bin in Hz
    pub max_freq: f64,
    /// Calibrated bin amplitudes, lowest frequency first
    pub bins: Vec<f64>,
}

impl Spectrum {
    /// Create a new spectrum
    pub fn new(timestamp: i64, min_freq: f64, max_freq: f64, bins: Vec<f64>) -> Self {
        Self {
            timestamp,
            min_freq,
            max_freq,
            bins,
        }
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Spacing between adjacent bins in Hz
    pub fn resolution(&self) -> f64 {
        if self.bins.len() < 2 {
            return 0.0;
        }
        (self.max_freq - self.min_freq) / (self.bins.len() - 1) as f64
    }

    /// Frequency of each bin in Hz
    pub fn frequency_axis(&self) -> Vec<f64> {
        let step = self.resolution();
        (0..self.bins.len())
            .map(|i| self.min_freq + i as f64 * step)
            .collect()
    }

    /// Acquisition time as `YYYY-MM-DDTHH:MM:SS`
    pub fn iso_timestamp(&self) -> Result<String, TimestampError> {
        timestamp::to_iso(self.timestamp)
    }
}
