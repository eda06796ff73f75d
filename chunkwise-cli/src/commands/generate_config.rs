//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration matching the built-in defaults
pub const CONFIG_TEMPLATE: &str = r#"# chunkwise configuration

# Texts with fewer tokens than the first tier's min_tokens stay in one chunk.
# Otherwise the last tier whose min_tokens is reached decides the window.
# min_tokens must increase strictly and overlap must be smaller than chunk_size.
[[planner.tiers]]
min_tokens = 300
chunk_size = 512
overlap = 64

[[planner.tiers]]
min_tokens = 2000
chunk_size = 1024
overlap = 128

[[planner.tiers]]
min_tokens = 5000
chunk_size = 1500
overlap = 200

[[planner.tiers]]
min_tokens = 12000
chunk_size = 2000
overlap = 250

[output]
# text, json or markdown
default_format = "text"
pretty_json = true

[server]
# Overridden by --host/--port and CHUNKWISE_HOST/CHUNKWISE_PORT
host = "0.0.0.0"
port = 5555
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the planner tiers to suit your embedding model");
        println!("2. Validate your configuration:");
        println!("   chunkwise validate {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   chunkwise split -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
