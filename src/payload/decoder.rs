use std::io::{Cursor, Read};

use base64::prelude::*;
use byteorder::{LittleEndian, ReadBytesExt};
use flate2::read::ZlibDecoder;
use log::debug;

use super::error::DecodeError;

/// Bytes per encoded sample (signed 16-bit)
pub const SAMPLE_WIDTH: usize = 2;

/// Decoder for T8 measurement payloads
pub struct PayloadDecoder;

impl PayloadDecoder {
    /// Decode a payload into raw sample codes.
    ///
    /// A trailing odd byte in the decompressed buffer is dropped, so the
    /// result always holds `len / 2` samples in buffer order.
    ///
    /// # Arguments
    /// * `raw` - The base64 text from the `data` field of a T8 record
    ///
    /// # Returns
    /// A `Vec<f32>` holding one value per 16-bit sample
    pub fn decode(raw: &str) -> Result<Vec<f32>, DecodeError> {
        let bytes = Self::inflate(raw)?;
        if bytes.len() % SAMPLE_WIDTH != 0 {
            debug!("Dropping trailing byte of {}-byte payload", bytes.len());
        }
        Self::bytes_to_samples(&bytes)
    }

    /// Decode a payload, rejecting buffers with a trailing odd byte
    pub fn decode_strict(raw: &str) -> Result<Vec<f32>, DecodeError> {
        let bytes = Self::inflate(raw)?;
        if bytes.len() % SAMPLE_WIDTH != 0 {
            return Err(DecodeError::EncodingError {
                length: bytes.len(),
            });
        }
        Self::bytes_to_samples(&bytes)
    }

    /// Base64 decode and zlib inflate the payload text
    fn inflate(raw: &str) -> Result<Vec<u8>, DecodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }

        // Step 1: Base64 decode
        let compressed = BASE64_STANDARD.decode(trimmed)?;

        // Step 2: Decompress
        let mut decoder = ZlibDecoder::new(&compressed[..]);
        let mut bytes = Vec::new();
        decoder.read_to_end(&mut bytes)?;

        debug!(
            "Inflated payload: {} base64 chars, {} compressed bytes, {} raw bytes",
            trimmed.len(),
            compressed.len(),
            bytes.len()
        );

        Ok(bytes)
    }

    /// Step 3: read little-endian i16 samples, ignoring any trailing odd byte
    fn bytes_to_samples(bytes: &[u8]) -> Result<Vec<f32>, DecodeError> {
        let count = bytes.len() / SAMPLE_WIDTH;
        let mut samples = Vec::with_capacity(count);
        let mut cursor = Cursor::new(bytes);

        for _ in 0..count {
            let code = cursor.read_i16::<LittleEndian>()?;
            samples.push(f32::from(code));
        }

        Ok(samples)
    }
}

/// Decode a payload into raw sample codes (see [`PayloadDecoder::decode`])
pub fn decode(raw: &str) -> Result<Vec<f32>, DecodeError> {
    PayloadDecoder::decode(raw)
}

/// Decode a payload, failing on an odd decompressed length
pub fn decode_strict(raw: &str) -> Result<Vec<f32>, DecodeError> {
    PayloadDecoder::decode_strict(raw)
}

/// Apply a scale factor to every sample, producing physical units
pub fn calibrate(samples: &[f32], factor: f64) -> Vec<f64> {
    samples.iter().map(|&s| f64::from(s) * factor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn encode(bytes: &[u8]) -> String {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        BASE64_STANDARD.encode(encoder.finish().unwrap())
    }

    #[test]
    fn test_decode_little_endian_i16() {
        // 1, -1, i16::MAX, i16::MIN
        let bytes = [0x01, 0x00, 0xff, 0xff, 0xff, 0x7f, 0x00, 0x80];

        let result = decode(&encode(&bytes)).unwrap();

        assert_eq!(result, vec![1.0, -1.0, 32767.0, -32768.0]);
    }

    #[test]
    fn test_decode_drops_trailing_byte() {
        let bytes = [0x10, 0x00, 0x20, 0x00, 0x7f];

        let result = decode(&encode(&bytes)).unwrap();

        assert_eq!(result, vec![16.0, 32.0]);
    }

    #[test]
    fn test_decode_strict_rejects_odd_length() {
        let bytes = [0x10, 0x00, 0x7f];

        match decode_strict(&encode(&bytes)) {
            Err(DecodeError::EncodingError { length }) => assert_eq!(length, 3),
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_strict_accepts_even_length() {
        let bytes = [0x10, 0x00, 0x20, 0x00];

        assert_eq!(decode_strict(&encode(&bytes)).unwrap(), vec![16.0, 32.0]);
    }

    #[test]
    fn test_decode_empty_text() {
        assert!(matches!(decode(""), Err(DecodeError::EmptyPayload)));
        assert!(matches!(decode("  \n"), Err(DecodeError::EmptyPayload)));
    }

    #[test]
    fn test_decode_empty_stream() {
        assert!(decode(&encode(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_decode_surrounding_whitespace() {
        let payload = format!("  {}\n", encode(&[0x02, 0x00]));

        assert_eq!(decode(&payload).unwrap(), vec![2.0]);
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(matches!(
            decode("not base64!!"),
            Err(DecodeError::Base64Error(_))
        ));
    }

    #[test]
    fn test_decode_not_zlib() {
        let payload = BASE64_STANDARD.encode([0x00, 0x01, 0x02, 0x03, 0x04]);

        assert!(matches!(
            decode(&payload),
            Err(DecodeError::DecompressionError(_))
        ));
    }

    #[test]
    fn test_calibrate() {
        let samples = [1.0, -2.0, 4.0];

        assert_eq!(calibrate(&samples, 0.5), vec![0.5, -1.0, 2.0]);
        assert_eq!(calibrate(&samples, 1.0), vec![1.0, -2.0, 4.0]);
        assert_eq!(calibrate(&samples, 0.0), vec![0.0, 0.0, 0.0]);
        assert!(calibrate(&[], 3.0).is_empty());
    }
}
