//! Chunk processor: normalize, plan, split

use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Error, Input, Output, PlanSummary, SplitRequest, SplitResponse};
use crate::application::{ChunkSplitter, SplitResult};
use crate::domain::{normalizer, ChunkParams};
use crate::tokenizer::Tokenizer;

/// Stateless pipeline over a shared tokenizer
///
/// Holds no per-request state, so one processor can serve any number of
/// concurrent requests behind an `Arc`.
#[derive(Clone)]
pub struct ChunkProcessor {
    tokenizer: Arc<dyn Tokenizer>,
    config: Config,
}

impl std::fmt::Debug for ChunkProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkProcessor")
            .field("tokenizer", &self.tokenizer.name())
            .field("config", &self.config)
            .finish()
    }
}

impl ChunkProcessor {
    /// Create a processor over the cl100k_base vocabulary
    #[cfg(feature = "tiktoken")]
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create a cl100k_base processor with custom configuration
    #[cfg(feature = "tiktoken")]
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let tokenizer = crate::tokenizer::Cl100kTokenizer::new()?;
        Ok(Self::with_tokenizer(Arc::new(tokenizer), config))
    }

    /// Create a processor over any tokenizer
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>, config: Config) -> Self {
        Self { tokenizer, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenizer in use
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Canonicalize raw text
    pub fn normalize(&self, raw: &str) -> String {
        normalizer::normalize(raw)
    }

    /// Choose window parameters for normalized text
    pub fn plan(&self, normalized: &str) -> ChunkParams {
        self.config
            .plan_table
            .plan(self.tokenizer.count_tokens(normalized))
    }

    /// Split normalized text with explicit parameters
    pub fn split(&self, normalized: &str, params: ChunkParams) -> SplitResult {
        ChunkSplitter::new(self.tokenizer.as_ref()).split(normalized, params)
    }

    /// Run the full pipeline on raw text
    ///
    /// The normalized text is encoded once; the same token sequence feeds the
    /// planner and the splitter.
    pub fn chunk_text(&self, raw: &str) -> Output {
        let start = Instant::now();

        let normalized = self.normalize(raw);
        let tokens = self.tokenizer.encode(&normalized);
        let params = self.config.plan_table.plan(tokens.len());
        let result = ChunkSplitter::new(self.tokenizer.as_ref()).split_tokens(&tokens, params);

        log::debug!(
            "Chunked {} tokens into {} windows (chunk_size={}, overlap={})",
            tokens.len(),
            result.chunks.len(),
            params.chunk_size,
            params.overlap
        );

        Output::from_split(result, params, normalized.chars().count(), start.elapsed())
    }

    /// Read an input and run the full pipeline on it
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let text = input.into_text()?;
        Ok(self.chunk_text(&text))
    }

    /// Report the planner's decision for raw text without splitting it
    pub fn plan_text(&self, raw: &str) -> PlanSummary {
        let normalized = self.normalize(raw);
        let token_count = self.tokenizer.count_tokens(&normalized);
        PlanSummary::new(token_count, self.config.plan_table.plan(token_count))
    }

    /// Handle a JSON request body end to end
    pub fn handle_request(&self, body: &[u8]) -> Result<SplitResponse, Error> {
        let request = SplitRequest::from_json(body)?;
        let output = self.chunk_text(&request.text);
        if output.has_decode_failures() {
            log::warn!(
                "{} of {} windows failed to decode",
                output.metadata.decode_failures.len(),
                output.chunk_count()
            );
        }
        Ok(output.into_response())
    }
}
