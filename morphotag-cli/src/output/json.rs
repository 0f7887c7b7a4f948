//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use morphotag_engine::Token;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs one array of tokens or of sentences
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    items: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            items: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &Token) -> Result<()> {
        self.items.push(serde_json::to_value(token)?);
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &[Token]) -> Result<()> {
        self.items.push(serde_json::to_value(sentence)?);
        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let items = std::mem::take(&mut self.items);
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &items)?;
        } else {
            serde_json::to_writer(&mut self.writer, &items)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_array() {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out, false);
        formatter.format_token(&Token::new("Je", "být", "VB")).unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"word": "Je", "lemma": "být", "tag": "VB"}])
        );
    }

    #[test]
    fn test_grouped_array() {
        let mut out = Vec::new();
        let mut formatter = JsonFormatter::new(&mut out, true);
        formatter
            .format_sentence(&[Token::new("a", "a", "X"), Token::new("b", "b", "X")])
            .unwrap();
        formatter.format_sentence(&[Token::new("c", "c", "X")]).unwrap();
        formatter.finish().unwrap();
        drop(formatter);

        let value: Value = serde_json::from_slice(&out).unwrap();
        let sizes: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_array().unwrap().len())
            .collect();
        assert_eq!(sizes, [2, 1]);
    }

    #[test]
    fn test_empty_output() {
        let mut out = Vec::new();
        JsonFormatter::new(&mut out, false).finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
