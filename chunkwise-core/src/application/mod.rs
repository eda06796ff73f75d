//! Tokenizer-backed pipeline stages

pub mod splitter;

pub use splitter::{ChunkSplitter, DecodeFailure, SplitResult};
