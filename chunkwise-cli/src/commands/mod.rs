//! CLI command implementations

use crate::config::CliConfig;
use anyhow::{Context, Result};
use chunkwise_core::{ChunkProcessor, CL100K_BASE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod generate_config;
pub mod plan;
pub mod serve;
pub mod split;
pub mod validate;

/// Token-window text chunking
#[derive(Debug, Parser)]
#[command(name = "chunkwise", version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors; no progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into overlapping token windows
    Split(split::SplitArgs),

    /// Show the chunk size and overlap chosen for each input
    Plan(plan::PlanArgs),

    /// Serve `POST /split` over HTTP
    Serve(serve::ServeArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Cli {
    /// Initialize logging, load configuration and run the command
    pub fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.quiet)?;
        log::debug!("Arguments: {:?}", self);

        let config = || CliConfig::load(self.config.as_deref());
        match &self.command {
            Commands::Split(args) => args.execute(&config()?, self.quiet),
            Commands::Plan(args) => args.execute(&config()?),
            Commands::Serve(args) => args.execute(&config()?),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(self.config.as_deref()),
        }
    }
}

/// Processor over cl100k_base with the configured tier table
pub(crate) fn load_processor(config: &CliConfig) -> Result<ChunkProcessor> {
    let core_config = config.core_config()?;
    let processor = ChunkProcessor::with_config(core_config)
        .with_context(|| format!("Failed to load the {CL100K_BASE} tokenizer"))?;
    log::debug!("Loaded {processor:?}");
    Ok(processor)
}

/// Map verbosity flags to a default filter; `RUST_LOG` still wins
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(verbose, quiet)),
    )
    .try_init()
    .context("Failed to initialize logging")
}
