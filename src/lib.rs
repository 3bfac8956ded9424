//! # t8-client - Access to T8 Vibration Measurements
//!
//! `t8_client` lists, fetches, exports and plots the waveforms and spectra
//! stored on a T8 condition-monitoring server.
//!
//! ## Key Features
//!
//! - **Payload Decoding**: T8 ships samples as base64 text wrapping a zlib
//!   stream of little-endian 16-bit integers. [`payload`] turns that into
//!   floating-point samples and applies the calibration factor.
//!
//! - **UTC Timestamps**: Measurements are addressed by integer epoch seconds.
//!   [`timestamp`] converts them to and from `YYYY-MM-DDTHH:MM:SS`, always in
//!   UTC regardless of the host timezone.
//!
//! - **REST Retrieval**: [`client`] talks to the T8 API with basic
//!   authentication, configured by an explicit [`client::ClientConfig`].
//!
//! - **CSV and PNG Output**: [`export`] dumps listings and signals as CSV,
//!   [`plot`] renders them as line charts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use t8_client::client::{ClientConfig, MeasurementId, T8Client};
//! use t8_client::export;
//!
//! let client = T8Client::new(ClientConfig::new("https://t8.example.com/t8_api", "user", "pass"));
//! let id = MeasurementId::new("LP_Turbine", "MAD31CY005", "AM1");
//!
//! let spectrum = client.get_spectrum_at(&id, "2019-04-10T14:43:13")?;
//! println!("{} bins, {:.3} Hz resolution", spectrum.len(), spectrum.resolution());
//! export::write_spectrum("spectrum.csv", &spectrum)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Decoding a Payload Directly
//!
//! ```rust
//! use t8_client::payload;
//!
//! // zlib stream of the bytes [0x01, 0x00, 0xff, 0xff]
//! let raw = "eJxjZPj/HwADBQIA";
//! let samples = payload::decode(raw)?;
//! assert_eq!(samples, vec![1.0, -1.0]);
//! assert_eq!(payload::calibrate(&samples, 0.5), vec![0.5, -0.5]);
//! # Ok::<(), t8_client::payload::DecodeError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`payload`]: base64 + zlib + i16 decoding and calibration
//! - [`timestamp`]: epoch seconds to/from ISO-8601 (UTC)
//! - [`signal`]: calibrated `Waveform` and `Spectrum` values
//! - [`client`]: blocking REST client for the T8 API
//! - [`export`]: CSV writers
//! - [`plot`]: PNG rendering (feature `plot`)

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod export;
pub mod payload;
pub mod signal;
pub mod timestamp;

#[cfg(feature = "plot")]
pub mod plot;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::client::{ClientConfig, ClientError, MeasurementId, MeasurementKind, T8Client};
    pub use crate::export::{ExportError, TimestampRecord};
    pub use crate::payload::{calibrate, decode, DecodeError};
    pub use crate::signal::{Spectrum, Waveform};
    pub use crate::timestamp::{to_iso, to_unix, TimestampError};

    #[cfg(feature = "plot")]
    pub use crate::plot::{PlotError, PlotStyle};
}
