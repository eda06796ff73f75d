//! Text normalization and adaptive token-window chunking
//!
//! Prepares long-form text for token-budgeted consumers such as embedding
//! pipelines. A text goes through three stages:
//!
//! - **normalize**: strip control and other-symbol codepoints, literal `null`
//!   markers and redundant spaces
//! - **plan**: pick a window size and overlap from the text's total token count
//! - **split**: slide that window over the token sequence and decode each window
//!
//! # Architecture
//!
//! - [`domain`]: pure normalization, planning and window arithmetic
//! - [`tokenizer`]: the encode/decode seam and the cl100k_base vocabulary
//! - [`application`]: the tokenizer-backed splitter
//! - [`api`]: the processor facade, configuration and request bodies
//!
//! # Example
//!
//! ```rust
//! use chunkwise_core::{ChunkProcessor, Config, CodepointTokenizer};
//! use std::sync::Arc;
//!
//! let processor = ChunkProcessor::with_tokenizer(Arc::new(CodepointTokenizer), Config::default());
//!
//! let output = processor.chunk_text("Hello   world\n\nnull test");
//! assert_eq!(output.chunks, vec!["Hello world test"]);
//! assert_eq!(output.metadata.params.chunk_size, 16);
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod tokenizer;

pub use api::{
    ChunkProcessor, Config, ConfigBuilder, Error, Input, Output, PlanSummary, ProcessingMetadata,
    Result, SplitRequest, SplitResponse,
};
pub use application::{ChunkSplitter, DecodeFailure, SplitResult};
pub use domain::{normalize, ChunkParams, PlanTable, PlanTier, TokenWindow};
#[cfg(feature = "tiktoken")]
pub use tokenizer::Cl100kTokenizer;
pub use tokenizer::{CodepointTokenizer, DecodeError, TokenId, Tokenizer, CL100K_BASE};
