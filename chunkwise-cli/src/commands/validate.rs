//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to validate (default: the global --config)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, global_config: Option<&Path>) -> Result<()> {
        let Some(path) = self.file.as_deref().or(global_config) else {
            anyhow::bail!("No configuration file given");
        };

        println!("Validating configuration: {}", path.display());

        match CliConfig::from_file(path) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                for tier in &config.planner.tiers {
                    println!(
                        "  >= {:>6} tokens: chunk_size {}, overlap {}",
                        tier.min_tokens, tier.chunk_size, tier.overlap
                    );
                }
                println!("  Output format: {:?}", config.output.default_format);
                println!("  Server: {}:{}", config.server.host, config.server.port);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            file: Some(PathBuf::from("test.toml")),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_file = config_file(
            r#"
[planner]
tiers = [{ min_tokens = 50, chunk_size = 64, overlap = 8 }]
"#,
        );

        let args = ValidateArgs {
            file: Some(temp_file.path().to_path_buf()),
        };
        assert!(args.execute(None).is_ok());
    }

    #[test]
    fn test_validate_unordered_tiers() {
        let temp_file = config_file(
            r#"
[planner]
tiers = [
    { min_tokens = 500, chunk_size = 64, overlap = 8 },
    { min_tokens = 100, chunk_size = 64, overlap = 8 },
]
"#,
        );

        let args = ValidateArgs {
            file: Some(temp_file.path().to_path_buf()),
        };
        let err = args.execute(None).unwrap_err();
        assert!(err.to_string().contains("must be greater than previous"));
    }

    #[test]
    fn test_falls_back_to_global_config() {
        let temp_file = config_file("[server]\nport = 1234\n");
        let args = ValidateArgs { file: None };
        assert!(args.execute(Some(temp_file.path())).is_ok());
        assert!(args.execute(None).is_err());
    }
}
