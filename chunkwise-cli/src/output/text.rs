//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_core::Output;
use std::io::Write;

/// Plain text formatter - outputs one chunk per line
///
/// Documents are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &Output) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        for chunk in &output.chunks {
            writeln!(self.writer, "{chunk}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
