//! Per-tagger scratch buffers

use crate::error::{Result, TaggerError};
use morphotag_core::{TaggedLemma, Token, TokenRange};

/// Buffers overwritten for every sentence
///
/// Only owned [`Token`]s leave this type; nothing hands out references into
/// the buffers, so a sentence's results cannot outlive the next refill.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    pub(crate) forms: Vec<String>,
    pub(crate) lemmas: Vec<TaggedLemma>,
    pub(crate) ranges: Vec<TokenRange>,
}

impl Scratch {
    /// Number of tokens in the current sentence
    pub(crate) fn len(&self) -> usize {
        self.forms.len()
    }

    pub(crate) fn clear(&mut self) {
        self.forms.clear();
        self.lemmas.clear();
        self.ranges.clear();
    }

    /// Check that the tokenizer produced one range per form
    pub(crate) fn check_ranges(&self, tokenizer: &str) -> Result<()> {
        if self.ranges.len() != self.forms.len() {
            return Err(TaggerError::contract(format!(
                "{tokenizer} tokenizer produced {} forms but {} ranges",
                self.forms.len(),
                self.ranges.len()
            )));
        }
        Ok(())
    }

    /// Check that the engine produced one analysis per form
    pub(crate) fn check_lemmas(&self) -> Result<()> {
        if self.lemmas.len() != self.forms.len() {
            return Err(TaggerError::contract(format!(
                "engine returned {} analyses for {} forms",
                self.lemmas.len(),
                self.forms.len()
            )));
        }
        Ok(())
    }

    /// Build the token at `index`, taking its word from `text`
    pub(crate) fn token(&self, text: &str, index: usize) -> Result<Token> {
        let (range, analysis) = match (self.ranges.get(index), self.lemmas.get(index)) {
            (Some(range), Some(analysis)) => (range, analysis),
            _ => {
                return Err(TaggerError::contract(format!(
                    "token index {index} outside sentence of {} tokens",
                    self.len()
                )))
            }
        };

        let word = range.slice(text).ok_or_else(|| {
            TaggerError::contract(format!(
                "range {}..{} is not a valid slice of {} bytes of text",
                range.start,
                range.end(),
                text.len()
            ))
        })?;

        Ok(Token::new(word, analysis.lemma.as_str(), analysis.tag.as_str()))
    }
}
