//! Tokenizer facade
//!
//! Sentence splitting and tokenization without tagging.

use crate::error::Result;
use morphotag_core::{new_tokenizer, SentenceTokenizer, TokenRange, TokenizerKind};

/// Named tokenizer producing sentences of word forms
pub struct Tokenizer {
    kind: TokenizerKind,
    inner: Box<dyn SentenceTokenizer>,
    forms: Vec<String>,
    ranges: Vec<TokenRange>,
}

impl Tokenizer {
    /// Create a tokenizer of the given kind
    pub fn new(kind: TokenizerKind) -> Result<Self> {
        Ok(Self {
            kind,
            inner: new_tokenizer(kind)?,
            forms: Vec::new(),
            ranges: Vec::new(),
        })
    }

    /// Create a tokenizer from its name (`vertical`, `czech`, `english` or
    /// `generic`, case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        Self::new(name.parse()?)
    }

    /// Kind of this tokenizer
    pub fn kind(&self) -> TokenizerKind {
        self.kind
    }

    /// Split `text` into sentences
    ///
    /// Restarts the tokenizer on `text`; the returned iterator holds the
    /// tokenizer until dropped.
    pub fn apply(&mut self, text: &str) -> Sentences<'_> {
        self.inner.set_text(text);
        Sentences { tokenizer: self }
    }

    /// Split `text` into sentences, pairing each form with its byte range in `text`
    pub fn apply_with_ranges(&mut self, text: &str) -> SentencesWithRanges<'_> {
        self.inner.set_text(text);
        SentencesWithRanges { tokenizer: self }
    }

    fn next_sentence(&mut self) -> bool {
        self.inner.next_sentence(&mut self.forms, &mut self.ranges)
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").field("kind", &self.kind).finish()
    }
}

/// Sentences of a text, as word forms
pub struct Sentences<'a> {
    tokenizer: &'a mut Tokenizer,
}

impl Iterator for Sentences<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tokenizer.next_sentence() {
            Some(std::mem::take(&mut self.tokenizer.forms))
        } else {
            None
        }
    }
}

/// Sentences of a text, as word forms with byte ranges
pub struct SentencesWithRanges<'a> {
    tokenizer: &'a mut Tokenizer,
}

impl Iterator for SentencesWithRanges<'_> {
    type Item = Vec<(String, TokenRange)>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.tokenizer.next_sentence() {
            return None;
        }
        let forms = std::mem::take(&mut self.tokenizer.forms);
        Some(forms.into_iter().zip(self.tokenizer.ranges.iter().copied()).collect())
    }
}
