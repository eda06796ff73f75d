//! cl100k_base BPE vocabulary backed by `tiktoken-rs`

use super::{DecodeError, TokenId, Tokenizer, CL100K_BASE};
use crate::api::Error;
use std::collections::HashSet;
use tiktoken_rs::CoreBPE;

/// Mergeable ranks of cl100k_base are contiguous from zero
const ORDINARY_VOCAB_SIZE: TokenId = 100_256;

/// Tokenizer for the `cl100k_base` vocabulary
///
/// Text is encoded with the ordinary path, so special-token markers such as
/// `<|endoftext|>` are tokenized as plain text instead of being rejected.
///
/// Decoding is lossy: a window edge that cuts a multi-byte character yields
/// U+FFFD at that edge instead of an error. Only ids outside the vocabulary
/// fail.
pub struct Cl100kTokenizer {
    bpe: CoreBPE,
    special_ids: HashSet<TokenId>,
}

impl std::fmt::Debug for Cl100kTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cl100kTokenizer")
            .field("vocabulary", &CL100K_BASE)
            .finish()
    }
}

impl Cl100kTokenizer {
    /// Load the vocabulary
    pub fn new() -> Result<Self, Error> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| Error::TokenizerUnavailable(format!("{CL100K_BASE}: {e}")))?;
        let special_ids = bpe
            .special_tokens()
            .into_iter()
            .flat_map(|token| bpe.encode_with_special_tokens(token))
            .collect();
        log::debug!("Loaded {CL100K_BASE} vocabulary");
        Ok(Self { bpe, special_ids })
    }

    fn is_known(&self, id: TokenId) -> bool {
        id < ORDINARY_VOCAB_SIZE || self.special_ids.contains(&id)
    }
}

impl Tokenizer for Cl100kTokenizer {
    fn name(&self) -> &str {
        CL100K_BASE
    }

    fn encode(&self, text: &str) -> Vec<TokenId> {
        self.bpe.encode_ordinary(text)
    }

    fn decode(&self, tokens: &[TokenId]) -> Result<String, DecodeError> {
        if let Some(id) = tokens.iter().copied().find(|&id| !self.is_known(id)) {
            return Err(DecodeError::new(
                tokens.len(),
                format!("token {id} is not in {CL100K_BASE}"),
            ));
        }

        let bytes: Vec<u8> = self
            .bpe
            ._decode_native_and_split(tokens.to_vec())
            .flatten()
            .collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
