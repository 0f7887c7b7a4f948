//! Input abstraction for tagging
//!
//! The caller chooses between raw text and pre-tokenized sentences by picking
//! a variant, so a string can never be mistaken for a sequence of words.

use crate::error::{Result, TaggerError};
use serde_json::Value;

/// Tagger input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Untokenized, unsegmented text; requires a model with a tokenizer
    RawText(String),
    /// Sentences given as lists of words, in order
    Segmented(Vec<Vec<String>>),
}

impl Input {
    /// Create raw text input
    pub fn raw<S: Into<String>>(text: S) -> Self {
        Input::RawText(text.into())
    }

    /// Create pre-tokenized input from any nested iterable of strings
    pub fn segmented<I, S, W>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Input::Segmented(
            sentences
                .into_iter()
                .map(|sentence| sentence.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Parse vertical text: one token per line, an empty line between sentences
    pub fn from_vertical(text: &str) -> Self {
        let mut sentences = Vec::new();
        let mut current = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                if !current.is_empty() {
                    sentences.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line.to_string());
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }
        Input::Segmented(sentences)
    }

    /// Build input from an untyped JSON value
    ///
    /// A string becomes [`Input::RawText`]; a non-empty array of arrays of
    /// strings becomes [`Input::Segmented`]. Anything else is rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Input::RawText(text.clone())),
            other => Self::pretokenized_from_json(other),
        }
    }

    /// Build pre-tokenized input from an untyped JSON value
    ///
    /// Only a non-empty array of arrays of strings is accepted; a bare string
    /// is rejected rather than split into characters.
    pub fn pretokenized_from_json(value: &Value) -> Result<Self> {
        const EXPECTED: &str = "expected a string or a sequence of sequences (not strings!) of strings";

        let sentences = match value {
            Value::Array(sentences) if !sentences.is_empty() => sentences,
            Value::Array(_) => {
                return Err(TaggerError::invalid_input(format!(
                    "{EXPECTED}, got an empty sequence"
                )))
            }
            Value::String(_) => {
                return Err(TaggerError::invalid_input(format!(
                    "{EXPECTED}, got a single string where sentences were required"
                )))
            }
            other => {
                return Err(TaggerError::invalid_input(format!(
                    "{EXPECTED}, got {}",
                    json_kind(other)
                )))
            }
        };

        sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| match sentence {
                Value::Array(words) => words
                    .iter()
                    .enumerate()
                    .map(|(j, word)| match word {
                        Value::String(word) => Ok(word.clone()),
                        other => Err(TaggerError::invalid_input(format!(
                            "word {j} of sentence {i} is {}, not a string",
                            json_kind(other)
                        ))),
                    })
                    .collect::<Result<Vec<_>>>(),
                other => Err(TaggerError::invalid_input(format!(
                    "{EXPECTED}, but sentence {i} is {}",
                    json_kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Input::Segmented)
    }

    /// Check the shape requirements that can be verified without a tagger
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Input::Segmented(sentences) if sentences.is_empty() => Err(
                TaggerError::invalid_input("pre-tokenized input must contain at least one sentence"),
            ),
            _ => Ok(()),
        }
    }

    /// Whether this is raw text
    pub fn is_raw(&self) -> bool {
        matches!(self, Input::RawText(_))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::RawText(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::RawText(text.to_string())
    }
}

impl From<Vec<Vec<String>>> for Input {
    fn from(sentences: Vec<Vec<String>>) -> Self {
        Input::Segmented(sentences)
    }
}
