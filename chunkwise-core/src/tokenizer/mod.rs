//! Tokenizer seam
//!
//! The chunking pipeline only needs two operations from a tokenizer: encode a
//! text into an ordered sequence of ids, and decode a contiguous slice of those
//! ids back into text. Everything vocabulary-specific lives behind [`Tokenizer`].

use std::sync::Arc;
use thiserror::Error;

mod codepoint;
#[cfg(feature = "tiktoken")]
mod cl100k;

pub use codepoint::CodepointTokenizer;
#[cfg(feature = "tiktoken")]
pub use cl100k::Cl100kTokenizer;

/// Vocabulary identifier of the BPE encoding used by the service
pub const CL100K_BASE: &str = "cl100k_base";

/// A single token id in the tokenizer's vocabulary
pub type TokenId = u32;

/// Failure to turn a token slice back into text
///
/// Raised when the slice holds ids the vocabulary cannot map back to text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to decode {len} tokens: {reason}")]
pub struct DecodeError {
    /// Number of tokens in the rejected slice
    pub len: usize,
    /// Tokenizer-provided reason
    pub reason: String,
}

impl DecodeError {
    /// Create a decode error for a slice of `len` tokens
    pub fn new(len: usize, reason: impl Into<String>) -> Self {
        Self {
            len,
            reason: reason.into(),
        }
    }
}

/// Encode/decode against one fixed vocabulary
pub trait Tokenizer: Send + Sync {
    /// Vocabulary identifier
    fn name(&self) -> &str;

    /// Encode text into token ids. Total over all inputs.
    fn encode(&self, text: &str) -> Vec<TokenId>;

    /// Decode a token slice into text
    fn decode(&self, tokens: &[TokenId]) -> Result<String, DecodeError>;

    /// Number of tokens `text` encodes to
    fn count_tokens(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode(&self, text: &str) -> Vec<TokenId> {
        (**self).encode(text)
    }

    fn decode(&self, tokens: &[TokenId]) -> Result<String, DecodeError> {
        (**self).decode(tokens)
    }

    fn count_tokens(&self, text: &str) -> usize {
        (**self).count_tokens(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode(&self, text: &str) -> Vec<TokenId> {
        (**self).encode(text)
    }

    fn decode(&self, tokens: &[TokenId]) -> Result<String, DecodeError> {
        (**self).decode(tokens)
    }

    fn count_tokens(&self, text: &str) -> usize {
        (**self).count_tokens(text)
    }
}
