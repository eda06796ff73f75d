//! Error types for the API

use crate::domain::PlanTableError;
use thiserror::Error;

/// Error type for API operations
///
/// Per-window decode failures are not represented here: they are recovered
/// inside the splitter and reported as diagnostics on the output.
#[derive(Debug, Error)]
pub enum Error {
    /// Request body is not a JSON object with a string `text` field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The BPE vocabulary could not be loaded
    #[error("Tokenizer unavailable: {0}")]
    TokenizerUnavailable(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<PlanTableError> for Error {
    fn from(err: PlanTableError) -> Self {
        Error::Configuration(err.to_string())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
