//! Token-window splitting

use crate::domain::{windows, ChunkParams, TokenWindow};
use crate::tokenizer::{DecodeError, TokenId, Tokenizer};
use serde::{Deserialize, Serialize};

/// A window whose tokens could not be decoded on their own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeFailure {
    /// The rejected window
    pub window: TokenWindow,
    /// Why the tokenizer rejected it
    pub reason: String,
}

/// Chunks of one text plus per-window diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Decoded chunks in token order
    pub chunks: Vec<String>,
    /// Total tokens in the split sequence
    pub token_count: usize,
    /// Windows that decoded to an empty chunk instead of text
    pub decode_failures: Vec<DecodeFailure>,
}

impl SplitResult {
    /// Whether every window decoded cleanly
    pub fn is_clean(&self) -> bool {
        self.decode_failures.is_empty()
    }
}

/// Splits token sequences into overlapping decoded windows
#[derive(Debug)]
pub struct ChunkSplitter<'a, T: Tokenizer + ?Sized> {
    tokenizer: &'a T,
}

impl<'a, T: Tokenizer + ?Sized> ChunkSplitter<'a, T> {
    /// Create a splitter over `tokenizer`
    pub fn new(tokenizer: &'a T) -> Self {
        Self { tokenizer }
    }

    /// Encode `normalized` once and split it into windows
    pub fn split(&self, normalized: &str, params: ChunkParams) -> SplitResult {
        let tokens = self.tokenizer.encode(normalized);
        self.split_tokens(&tokens, params)
    }

    /// Split an already encoded sequence
    ///
    /// A window that fails to decode becomes an empty chunk and is recorded in
    /// [`SplitResult::decode_failures`]; the remaining windows are unaffected.
    pub fn split_tokens(&self, tokens: &[TokenId], params: ChunkParams) -> SplitResult {
        let iter = windows(tokens.len(), params);
        let mut chunks = Vec::with_capacity(iter.len());
        let mut decode_failures = Vec::new();

        for window in iter {
            match self.decode_window(tokens, window) {
                Ok(text) => chunks.push(text),
                Err(err) => {
                    log::debug!("Window {window} failed to decode: {err}");
                    decode_failures.push(DecodeFailure {
                        window,
                        reason: err.reason,
                    });
                    chunks.push(String::new());
                }
            }
        }

        SplitResult {
            chunks,
            token_count: tokens.len(),
            decode_failures,
        }
    }

    fn decode_window(&self, tokens: &[TokenId], window: TokenWindow) -> Result<String, DecodeError> {
        self.tokenizer.decode(&tokens[window.start..window.end])
    }
}
