//! # T8 REST Client
//!
//! Retrieval of waveforms and spectra from a T8 server over HTTP with basic
//! authentication:
//!
//! ```text
//! {host}/rest/waves/{machine}/{point}/{pmode}           listing
//! {host}/rest/waves/{machine}/{point}/{pmode}/{ts}      one waveform
//! {host}/rest/spectra/{machine}/{point}/{pmode}[/{ts}]  same for spectra
//! ```
//!
//! ```rust,no_run
//! use t8_client::client::{ClientConfig, MeasurementId, T8Client};
//!
//! let client = T8Client::new(ClientConfig::new("https://t8.example.com/t8_api", "user", "pass"));
//! let id = MeasurementId::new("LP_Turbine", "MAD31CY005", "AM1");
//!
//! for ts in client.list_waves(&id)? {
//!     println!("{}", t8_client::timestamp::to_iso(ts)?);
//! }
//! let wave = client.get_wave_at(&id, "2019-04-10T14:43:13")?;
//! println!("{} samples at {} Hz", wave.len(), wave.sample_rate);
//! # Ok::<(), t8_client::client::ClientError>(())
//! ```

mod config;
mod error;
mod models;
mod rest;

pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use error::ClientError;
pub use models::{
    ItemLinks, Listing, ListingItem, MeasurementId, MeasurementKind, SpectrumRecord, WaveRecord,
};
pub use rest::T8Client;
