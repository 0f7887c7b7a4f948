//! Core types shared by tokenizers, engines and the tagger

use core::fmt;
use serde::{Deserialize, Serialize};

/// Byte range of one token inside the text last given to a tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenRange {
    /// Byte offset of the first byte of the token
    pub start: usize,
    /// Length of the token in bytes
    pub length: usize,
}

impl TokenRange {
    /// Create a new token range
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    /// Slice the range out of `text`
    ///
    /// Returns `None` when the range runs past the end of `text` or does not
    /// fall on UTF-8 character boundaries.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        let end = self.start.checked_add(self.length)?;
        text.get(self.start..end)
    }
}

/// Lemma and tag assigned to one form by a tagging engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TaggedLemma {
    /// Lemma (opaque to the pipeline)
    pub lemma: String,
    /// Morphological tag (opaque to the pipeline)
    pub tag: String,
}

impl TaggedLemma {
    /// Create a new tagged lemma
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

/// A tagged token as handed to callers
///
/// `word` is the exact substring of the input the token was read from, which
/// may differ from the form the tokenizer passed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Surface form taken from the original input
    pub word: String,
    /// Lemma assigned by the engine
    pub lemma: String,
    /// Tag assigned by the engine
    pub tag: String,
}

impl Token {
    /// Create a new token
    pub fn new(word: impl Into<String>, lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.word, self.lemma, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_range_slice() {
        let text = "Je zima.";
        assert_eq!(TokenRange::new(0, 2).slice(text), Some("Je"));
        assert_eq!(TokenRange::new(3, 4).slice(text), Some("zima"));
        assert_eq!(TokenRange::new(7, 1).slice(text), Some("."));
        assert_eq!(TokenRange::new(7, 1).end(), 8);
    }

    #[test]
    fn test_token_range_slice_out_of_bounds() {
        assert_eq!(TokenRange::new(5, 10).slice("short"), None);
        assert_eq!(TokenRange::new(usize::MAX, 2).slice("short"), None);
    }

    #[test]
    fn test_token_range_slice_inside_multibyte_char() {
        // "ě" is two bytes; splitting it must not panic
        let text = "sněžit";
        assert_eq!(TokenRange::new(0, 3).slice(text), None);
        assert_eq!(TokenRange::new(0, 4).slice(text), Some("sně"));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("zima", "zima-1", "NNFS1-----A----");
        assert_eq!(token.to_string(), "zima/zima-1/NNFS1-----A----");
    }
}
