//! Public API for chunk processing
//!
//! Wraps the normalizer, planner and splitter behind [`ChunkProcessor`] and
//! defines the request/response bodies shared by the CLI and the HTTP service.

mod config;
mod error;
mod input;
mod output;
mod processor;
mod request;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, PlanSummary, ProcessingMetadata};
pub use processor::ChunkProcessor;
pub use request::{SplitRequest, SplitResponse};
