//! Built-in sentence tokenizers
//!
//! Four variants are available: a line-based [`VerticalTokenizer`] and three
//! table-driven [`RuleTokenizer`]s (`generic`, `czech`, `english`) whose rules
//! are embedded as TOML under `configs/tokenizers/`.
//!
//! Instances are created explicitly through [`new_tokenizer`]; nothing is
//! shared between them except the immutable, lazily parsed rule tables.

use crate::error::{CoreError, Result};
use crate::traits::SentenceTokenizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod rule_based;
pub mod rules;
pub mod vertical;

pub use rule_based::RuleTokenizer;
pub use rules::TokenizerRules;
pub use vertical::VerticalTokenizer;

/// Enumerated tokenizer variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// One token per line, sentences separated by empty lines
    Vertical,
    /// Czech rules (abbreviations, lowercase continuation)
    Czech,
    /// English rules (abbreviations, contractions, apostrophe normalization)
    English,
    /// Language-neutral rules
    Generic,
}

impl TokenizerKind {
    /// All variants, in display order
    pub const ALL: [TokenizerKind; 4] = [
        TokenizerKind::Vertical,
        TokenizerKind::Czech,
        TokenizerKind::English,
        TokenizerKind::Generic,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Vertical => "vertical",
            TokenizerKind::Czech => "czech",
            TokenizerKind::English => "english",
            TokenizerKind::Generic => "generic",
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenizerKind {
    type Err = CoreError;

    fn from_str(name: &str) -> Result<Self> {
        TokenizerKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CoreError::UnknownTokenizer {
                name: name.to_string(),
            })
    }
}

/// Create a fresh tokenizer of the given kind
///
/// Fails only if the embedded rule table for `kind` is malformed.
pub fn new_tokenizer(kind: TokenizerKind) -> Result<Box<dyn SentenceTokenizer>> {
    match kind {
        TokenizerKind::Vertical => Ok(Box::new(VerticalTokenizer::new())),
        other => Ok(Box::new(RuleTokenizer::new(rules::rules_for(other)?))),
    }
}
