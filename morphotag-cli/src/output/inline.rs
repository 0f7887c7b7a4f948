//! Inline output formatter

use super::OutputFormatter;
use anyhow::Result;
use morphotag_engine::Token;
use std::io::Write;

/// Inline formatter - `word/lemma/tag` triples separated by spaces
///
/// One line per sentence, or per document in flat mode.
pub struct InlineFormatter<W: Write> {
    writer: W,
    line_open: bool,
}

impl<W: Write> InlineFormatter<W> {
    /// Create a new inline formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_open: false,
        }
    }
}

impl<W: Write + Send> OutputFormatter for InlineFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        if self.line_open {
            write!(self.writer, " ")?;
        }
        write!(self.writer, "{token}")?;
        self.line_open = true;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &[Token]) -> Result<()> {
        let line = sentence
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        if self.line_open {
            writeln!(self.writer)?;
            self.line_open = false;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.end_document()?;
        self.writer.flush()?;
        Ok(())
    }
}
