//! Split command implementation

use crate::config::CliConfig;
use crate::input::{resolve_sources, FileReader, InputSource};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chunkwise_core::{ChunkProcessor, Output};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or glob patterns; `-` or nothing reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Split files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel splitting (implies --parallel)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, config: &CliConfig, quiet: bool) -> Result<()> {
        let processor = super::load_processor(config)?;

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        self.run(&processor, config, quiet, writer)
    }

    /// Split every source and write formatted results to `writer`
    pub fn run(
        &self,
        processor: &ChunkProcessor,
        config: &CliConfig,
        quiet: bool,
        writer: Box<dyn Write + Send>,
    ) -> Result<()> {
        let sources = resolve_sources(&self.input)?;
        log::info!("Splitting {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        let split_one = |source: &InputSource| -> Result<(String, Output)> {
            let label = source.label();
            let text = FileReader::read_source(source)?;
            let output = processor.chunk_text(&text);
            progress.file_completed(&label, output.chunk_count());
            Ok((label, output))
        };

        let results: Vec<(String, Output)> = if self.is_parallel() && sources.len() > 1 {
            let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
            log::debug!("Using {threads} worker threads");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| sources.par_iter().map(split_one).collect::<Result<_>>())?
        } else {
            sources.iter().map(split_one).collect::<Result<_>>()?
        };
        progress.finish();

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for (label, output) in &results {
            for failure in &output.metadata.decode_failures {
                log::warn!(
                    "{label}: window {} decoded to an empty chunk: {}",
                    failure.window,
                    failure.reason
                );
            }
            formatter.format_document(label, output)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn is_parallel(&self) -> bool {
        self.parallel || self.threads.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerConfig;
    use crate::output::test_support::SharedBuffer;
    use chunkwise_core::{CodepointTokenizer, PlanTier};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn small_window_config() -> CliConfig {
        CliConfig {
            planner: PlannerConfig {
                tiers: vec![PlanTier::new(8, 4, 1)],
            },
            ..CliConfig::default()
        }
    }

    fn processor(config: &CliConfig) -> ChunkProcessor {
        ChunkProcessor::with_tokenizer(Arc::new(CodepointTokenizer), config.core_config().unwrap())
    }

    fn args(input: Vec<String>, format: OutputFormat) -> SplitArgs {
        SplitArgs {
            input,
            output: None,
            format: Some(format),
            parallel: false,
            threads: None,
        }
    }

    #[test]
    fn test_split_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "abc  def\nghij").unwrap();

        let config = small_window_config();
        let buffer = SharedBuffer::default();
        args(
            vec![path.to_string_lossy().to_string()],
            OutputFormat::Text,
        )
        .run(&processor(&config), &config, true, Box::new(buffer.clone()))
        .unwrap();

        // "abc def ghij" after normalization: 12 code points, windows of 4 stepping 3
        assert_eq!(buffer.contents(), "abc \n def\nf gh\nhij\n");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = TempDir::new().unwrap();
        for i in 0..6 {
            fs::write(dir.path().join(format!("{i}.txt")), "x".repeat(10 + i)).unwrap();
        }
        let pattern = dir.path().join("*.txt").to_string_lossy().to_string();
        let config = small_window_config();
        let processor = processor(&config);

        let sequential = SharedBuffer::default();
        args(vec![pattern.clone()], OutputFormat::Text)
            .run(&processor, &config, true, Box::new(sequential.clone()))
            .unwrap();

        let parallel = SharedBuffer::default();
        let mut parallel_args = args(vec![pattern], OutputFormat::Text);
        parallel_args.threads = Some(3);
        parallel_args
            .run(&processor, &config, true, Box::new(parallel.clone()))
            .unwrap();

        assert_eq!(sequential.contents(), parallel.contents());
        assert!(!sequential.contents().is_empty());
    }

    #[test]
    fn test_json_format_from_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "null hello world").unwrap();

        let mut config = small_window_config();
        config.output.default_format = OutputFormat::Json;
        let mut split = args(vec![path.to_string_lossy().to_string()], OutputFormat::Text);
        split.format = None;

        let buffer = SharedBuffer::default();
        split
            .run(&processor(&config), &config, true, Box::new(buffer.clone()))
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(
            parsed[0]["chunks"],
            serde_json::json!(["hell", "lo w", "worl", "ld"])
        );
        assert_eq!(parsed[0]["metadata"]["token_count"], 11);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = small_window_config();
        let result = args(vec!["/nonexistent/*.txt".to_string()], OutputFormat::Text).run(
            &processor(&config),
            &config,
            true,
            Box::new(SharedBuffer::default()),
        );
        assert!(result.is_err());
    }
}
