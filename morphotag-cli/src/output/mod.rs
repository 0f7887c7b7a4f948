//! Output formatting module

use anyhow::Result;
use morphotag_engine::Token;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::CliError;

/// Trait for output formatters
///
/// Flat tagging output arrives token by token through
/// [`format_token`](OutputFormatter::format_token), grouped output sentence
/// by sentence through [`format_sentence`](OutputFormatter::format_sentence).
pub trait OutputFormatter: Send {
    /// Format one token of a flat stream
    fn format_token(&mut self, token: &Token) -> Result<()>;

    /// Format one sentence
    fn format_sentence(&mut self, sentence: &[Token]) -> Result<()>;

    /// Mark the end of an input document
    fn end_document(&mut self) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod inline;
pub mod json;
pub mod vertical;

pub use inline::InlineFormatter;
pub use json::JsonFormatter;
pub use vertical::VerticalFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line: word, lemma and tag separated by tabs
    Vertical,
    /// One sentence per line as word/lemma/tag triples
    Inline,
    /// JSON array of tokens, or of sentences with --sentences
    Json,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Vertical, "word<TAB>lemma<TAB>tag, one token per line"),
        (OutputFormat::Inline, "word/lemma/tag triples, one sentence per line"),
        (OutputFormat::Json, "JSON array of token objects"),
    ];

    /// Format name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Vertical => "vertical",
            OutputFormat::Inline => "inline",
            OutputFormat::Json => "json",
        }
    }

    /// Create a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + 'static,
    {
        match self {
            OutputFormat::Vertical => Box::new(VerticalFormatter::new(writer)),
            OutputFormat::Inline => Box::new(InlineFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .map(|(format, _)| *format)
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CliError::ConfigError(format!("unknown output format '{name}'")))
    }
}
