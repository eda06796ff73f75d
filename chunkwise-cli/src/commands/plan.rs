//! Plan command implementation

use crate::config::CliConfig;
use crate::input::{resolve_sources, FileReader};
use anyhow::Result;
use chunkwise_core::{ChunkProcessor, PlanSummary};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Input files or glob patterns; `-` or nothing reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PlanRow {
    source: String,
    #[serde(flatten)]
    summary: PlanSummary,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let processor = super::load_processor(config)?;
        let stdout = io::stdout();
        self.run(&processor, &mut stdout.lock())
    }

    /// Report the planner decision for every source
    pub fn run(&self, processor: &ChunkProcessor, writer: &mut dyn Write) -> Result<()> {
        let mut rows = Vec::new();
        for source in resolve_sources(&self.input)? {
            let text = FileReader::read_source(&source)?;
            rows.push(PlanRow {
                source: source.label(),
                summary: processor.plan_text(&text),
            });
        }

        if self.json {
            serde_json::to_writer_pretty(&mut *writer, &rows)?;
            writeln!(writer)?;
        } else {
            writeln!(
                writer,
                "{:<40} {:>10} {:>10} {:>8} {:>8}",
                "SOURCE", "TOKENS", "CHUNK", "OVERLAP", "CHUNKS"
            )?;
            for row in &rows {
                let summary = &row.summary;
                writeln!(
                    writer,
                    "{:<40} {:>10} {:>10} {:>8} {:>8}",
                    row.source,
                    summary.token_count,
                    summary.params.chunk_size,
                    summary.params.overlap,
                    summary.window_count
                )?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
