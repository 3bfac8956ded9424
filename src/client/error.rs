use crate::payload::DecodeError;
use crate::timestamp::TimestampError;

/// Errors that can occur while talking to a T8 server
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Connection, TLS or protocol failure
    #[error("Transport error: {0}")]
    TransportError(#[from] Box<ureq::Transport>),

    /// I/O error reading the response body
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The response body is not the expected JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The response is JSON but not shaped like a T8 record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A machine, point or processing mode tag cannot be used in a URL
    #[error("Invalid tag '{0}': tags must be non-empty and must not contain '/'")]
    InvalidTag(String),

    /// The measurement payload could not be decoded
    #[error("Decode error: {0}")]
    DecodeError(#[from] DecodeError),

    /// A timestamp could not be converted
    #[error("Timestamp error: {0}")]
    TimestampError(#[from] TimestampError),
}
