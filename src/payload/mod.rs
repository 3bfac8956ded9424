//! # Measurement Payload Decoding
//!
//! T8 ships waveform and spectrum samples as a compact text blob. The
//! decoding pipeline is:
//!
//! 1. Base64 decode the text
//! 2. Inflate the zlib stream
//! 3. Interpret bytes as signed 16-bit integers (little-endian)
//!
//! Decoding only recovers the raw integer codes. Converting them to physical
//! units is a separate [`calibrate`] step, driven by the `factor` field of the
//! response envelope.

mod decoder;
mod error;

pub use decoder::{calibrate, decode, decode_strict, PayloadDecoder, SAMPLE_WIDTH};
pub use error::DecodeError;
