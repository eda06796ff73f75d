//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use chunkwise_core::domain::DEFAULT_TIERS;
use chunkwise_core::{Config, PlanTier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default bind address of the HTTP service
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port of the HTTP service
pub const DEFAULT_PORT: u16 = 5555;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Planner configuration
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// HTTP service configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Planner tiers, ascending by `min_tokens`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlannerConfig {
    /// Tier table; texts below the first tier stay in one chunk
    pub tiers: Vec<PlanTier>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS.to_vec(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML configuration
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the planner tiers
    pub fn validate(&self) -> Result<(), CliError> {
        self.core_config().map(|_| ())
    }

    /// Core processing configuration built from the planner section
    pub fn core_config(&self) -> Result<Config, CliError> {
        Config::builder()
            .tiers(self.planner.tiers.clone())
            .build()
            .map_err(CliError::from)
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
