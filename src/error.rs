//! Error types for QR Studio operations

use thiserror::Error;

/// Result type alias using QR Studio's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for QR Studio operations
///
/// Every variant is recoverable: failures carry a human-readable message that
/// is surfaced to the user verbatim, and the operation can be retried with
/// corrected input. There is no fatal class.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing or malformed for the selected payload kind
    #[error("{0}")]
    Validation(String),

    /// The builder succeeded but produced an empty payload
    #[error("No content to encode")]
    EmptyContent,

    /// The payload exceeds the capacity of the chosen QR correction tier
    #[error("Payload too large for QR code: {0}")]
    Capacity(String),

    /// The logo file could not be read, decoded, or composited
    #[error("Logo processing failed: {0}")]
    LogoProcessing(String),

    /// Saving the finished image to disk failed
    #[error("Failed to save image: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Persistence(e.to_string())
    }
}
