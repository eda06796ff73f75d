//! Chunkwise CLI library
//!
//! This library provides the command-line interface and HTTP service for the
//! chunkwise token-window chunker.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod server;

pub use commands::Cli;
pub use error::{CliError, CliResult};
