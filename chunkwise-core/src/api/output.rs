//! Output types for chunk processing

use crate::application::{DecodeFailure, SplitResult};
use crate::domain::{window_count, ChunkParams};
use crate::api::SplitResponse;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chunks of one text with processing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Decoded chunks in token order
    pub chunks: Vec<String>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Tokens in the normalized text
    pub token_count: usize,
    /// Window parameters chosen by the planner
    pub params: ChunkParams,
    /// Characters in the normalized text
    pub normalized_chars: usize,
    /// Windows that failed to decode and were emitted as empty chunks
    pub decode_failures: Vec<DecodeFailure>,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Planner decision for one text, without splitting it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Tokens in the normalized text
    pub token_count: usize,
    /// Window parameters chosen by the planner
    pub params: ChunkParams,
    /// Number of chunks a split would produce
    pub window_count: usize,
}

impl PlanSummary {
    pub(crate) fn new(token_count: usize, params: ChunkParams) -> Self {
        Self {
            token_count,
            params,
            window_count: window_count(token_count, params),
        }
    }
}

impl Output {
    pub(crate) fn from_split(
        result: SplitResult,
        params: ChunkParams,
        normalized_chars: usize,
        duration: Duration,
    ) -> Self {
        Self {
            chunks: result.chunks,
            metadata: ProcessingMetadata {
                token_count: result.token_count,
                params,
                normalized_chars,
                decode_failures: result.decode_failures,
                processing_time_ms: duration.as_secs_f64() * 1000.0,
            },
        }
    }

    /// Number of chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Whether any window decoded to an empty chunk
    pub fn has_decode_failures(&self) -> bool {
        !self.metadata.decode_failures.is_empty()
    }

    /// Drop the metadata and keep the wire response
    pub fn into_response(self) -> SplitResponse {
        SplitResponse {
            chunks: self.chunks,
        }
    }
}
