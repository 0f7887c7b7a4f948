//! Vertical output formatter

use super::OutputFormatter;
use anyhow::Result;
use morphotag_engine::Token;
use std::io::Write;

/// Vertical formatter - one `word\tlemma\ttag` line per token
///
/// Sentences, or whole documents in flat mode, are separated by an empty line.
pub struct VerticalFormatter<W: Write> {
    writer: W,
    open_block: bool,
}

impl<W: Write> VerticalFormatter<W> {
    /// Create a new vertical formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            open_block: false,
        }
    }

    fn write_token(&mut self, token: &Token) -> Result<()> {
        writeln!(self.writer, "{}\t{}\t{}", token.word, token.lemma, token.tag)?;
        Ok(())
    }
}

impl<W: Write + Send> OutputFormatter for VerticalFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        self.write_token(token)?;
        self.open_block = true;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &[Token]) -> Result<()> {
        for token in sentence {
            self.write_token(token)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        if self.open_block {
            writeln!(self.writer)?;
            self.open_block = false;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.end_document()?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("Je", "být", "VB-S---3P-AA---"),
            Token::new(".", ".", "Z:-------------"),
        ]
    }

    #[test]
    fn test_sentences() {
        let mut out = Vec::new();
        let mut formatter = VerticalFormatter::new(&mut out);
        formatter.format_sentence(&tokens()).unwrap();
        formatter.format_sentence(&tokens()[..1]).unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Je\tbýt\tVB-S---3P-AA---\n.\t.\tZ:-------------\n\nJe\tbýt\tVB-S---3P-AA---\n\n"
        );
    }

    #[test]
    fn test_flat_tokens_end_with_document() {
        let mut out = Vec::new();
        let mut formatter = VerticalFormatter::new(&mut out);
        for token in tokens() {
            formatter.format_token(&token).unwrap();
        }
        formatter.end_document().unwrap();
        formatter.end_document().unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Je\tbýt\tVB-S---3P-AA---\n.\t.\tZ:-------------\n\n"
        );
    }
}
