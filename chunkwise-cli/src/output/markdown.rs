//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use chunkwise_core::Output;
use std::io::Write;

/// Markdown formatter - one section per document, one numbered item per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        let params = output.metadata.params;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} tokens, chunk size {}, overlap {}*",
            output.metadata.token_count, params.chunk_size, params.overlap
        )?;
        writeln!(self.writer)?;

        for (index, chunk) in output.chunks.iter().enumerate() {
            writeln!(self.writer, "{}. {}", index + 1, chunk)?;
        }
        writeln!(self.writer)?;

        self.chunk_count += output.chunk_count();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
