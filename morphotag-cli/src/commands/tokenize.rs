//! Tokenize command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use morphotag_engine::{TokenRange, Tokenizer};
use serde::Serialize;
use std::io::{self, Write};

use super::init_logging;
use crate::input::{resolve_patterns, Document, FileReader};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Tokenizer to use (see `morphotag list tokenizers`)
    #[arg(short, long, value_name = "NAME", default_value = "generic")]
    pub tokenizer: String,

    /// Input files or patterns (supports glob; stdin when absent)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Include byte offsets of every token
    #[arg(long)]
    pub offsets: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: TokenizeFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats of the tokenize command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenizeFormat {
    /// One sentence per line, tokens separated by spaces; with --offsets one
    /// `form<TAB>start<TAB>length` line per token and an empty line after
    /// each sentence
    Text,
    /// JSON array of sentences
    Json,
}

/// Token with its byte range, for JSON output
#[derive(Debug, Serialize)]
struct OffsetToken {
    form: String,
    start: usize,
    length: usize,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let mut tokenizer = Tokenizer::from_name(&self.tokenizer)?;
        let documents = self.documents()?;

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        self.write(&mut tokenizer, &documents, &mut out)?;
        out.flush()?;
        Ok(())
    }

    fn documents(&self) -> Result<Vec<Document>> {
        if self.input.is_empty() {
            return Ok(vec![Document {
                name: "<stdin>".to_string(),
                text: FileReader::read_stdin()?,
            }]);
        }
        resolve_patterns(&self.input)?
            .iter()
            .map(|path| FileReader::read_document(path))
            .collect()
    }

    fn write<W: Write>(
        &self,
        tokenizer: &mut Tokenizer,
        documents: &[Document],
        out: &mut W,
    ) -> Result<()> {
        match self.format {
            TokenizeFormat::Text => {
                for document in documents {
                    log::debug!("Tokenizing {}", document.name);
                    if self.offsets {
                        for sentence in tokenizer.apply_with_ranges(&document.text) {
                            for (form, range) in sentence {
                                writeln!(out, "{form}\t{}\t{}", range.start, range.length)?;
                            }
                            writeln!(out)?;
                        }
                    } else {
                        for sentence in tokenizer.apply(&document.text) {
                            writeln!(out, "{}", sentence.join(" "))?;
                        }
                    }
                }
            }
            TokenizeFormat::Json => {
                let mut sentences = Vec::new();
                for document in documents {
                    if self.offsets {
                        for sentence in tokenizer.apply_with_ranges(&document.text) {
                            let tokens: Vec<OffsetToken> =
                                sentence.into_iter().map(offset_token).collect();
                            sentences.push(serde_json::to_value(tokens)?);
                        }
                    } else {
                        for sentence in tokenizer.apply(&document.text) {
                            sentences.push(serde_json::to_value(sentence)?);
                        }
                    }
                }
                serde_json::to_writer_pretty(&mut *out, &sentences)
                    .context("Failed to write JSON output")?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn offset_token((form, range): (String, TokenRange)) -> OffsetToken {
    OffsetToken {
        form,
        start: range.start,
        length: range.length,
    }
}
