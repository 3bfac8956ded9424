/// Errors that can occur while decoding a measurement payload
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload text is not valid standard base64
    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    /// The decoded bytes are not a valid zlib stream
    #[error("Decompression error: {0}")]
    DecompressionError(#[from] std::io::Error),

    /// The payload text was empty
    #[error("Empty payload")]
    EmptyPayload,

    /// The decompressed buffer is not a whole number of 16-bit samples
    #[error("Encoding error: {length} bytes is not a whole number of 2-byte samples")]
    EncodingError {
        /// Decompressed length in bytes
        length: usize,
    },
}
