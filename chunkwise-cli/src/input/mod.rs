//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use std::path::PathBuf;

/// Name used for standard input in patterns and output
pub const STDIN_MARKER: &str = "-";

/// One text source for the split command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// File on disk
    File(PathBuf),
}

impl InputSource {
    /// Label shown in formatted output
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_MARKER.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Resolve command-line patterns into sources
///
/// No patterns, or a lone `-`, means standard input.
pub fn resolve_sources(patterns: &[String]) -> anyhow::Result<Vec<InputSource>> {
    if patterns.is_empty() || (patterns.len() == 1 && patterns[0] == STDIN_MARKER) {
        return Ok(vec![InputSource::Stdin]);
    }
    if patterns.iter().any(|p| p == STDIN_MARKER) {
        anyhow::bail!("'-' (stdin) cannot be combined with file patterns");
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(InputSource::File)
        .collect())
}
