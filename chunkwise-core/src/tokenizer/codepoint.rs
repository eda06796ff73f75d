//! One token per Unicode scalar value

use super::{DecodeError, TokenId, Tokenizer};

/// Deterministic tokenizer mapping every `char` to its scalar value
///
/// Token counts equal character counts, which makes window arithmetic easy to
/// reason about in tests and benchmarks. Ids outside the scalar value range
/// (surrogates, values above U+10FFFF) fail to decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointTokenizer;

impl Tokenizer for CodepointTokenizer {
    fn name(&self) -> &str {
        "codepoint"
    }

    fn encode(&self, text: &str) -> Vec<TokenId> {
        text.chars().map(TokenId::from).collect()
    }

    fn decode(&self, tokens: &[TokenId]) -> Result<String, DecodeError> {
        tokens
            .iter()
            .map(|&id| {
                char::from_u32(id).ok_or_else(|| {
                    DecodeError::new(tokens.len(), format!("{id:#x} is not a scalar value"))
                })
            })
            .collect()
    }

    fn count_tokens(&self, text: &str) -> usize {
        text.chars().count()
    }
}
