//! Request and response bodies of the split operation

use crate::api::Error;
use serde::{Deserialize, Serialize};

/// Inbound body: `{"text": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Raw text to chunk
    pub text: String,
}

impl SplitRequest {
    /// Parse a JSON body
    ///
    /// Malformed JSON, a missing `text` field and a non-string `text` are all
    /// reported as [`Error::InvalidInput`]. An empty string is valid.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|e| Error::InvalidInput(e.to_string()))
    }
}

/// Outbound body: `{"chunks": ["...", ...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResponse {
    /// Chunks in token order
    pub chunks: Vec<String>,
}

impl SplitResponse {
    /// Serialize without escaping non-ASCII text
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Infrastructure(e.to_string()))
    }
}
