//! Collaborator traits for tokenizers and tagging engines

use crate::types::{TaggedLemma, TokenRange};

/// Incremental sentence tokenizer
///
/// A tokenizer owns a copy of the text most recently passed to
/// [`set_text`](SentenceTokenizer::set_text) together with a cursor into it.
/// Every call to [`next_sentence`](SentenceTokenizer::next_sentence) advances
/// the cursor past exactly one sentence.
pub trait SentenceTokenizer: Send + Sync {
    /// Replace the text and rewind the cursor to its start
    fn set_text(&mut self, text: &str);

    /// Extract the next sentence
    ///
    /// # Arguments
    /// * `forms` - Cleared, then filled with the word forms of the sentence
    /// * `ranges` - Cleared, then filled with one byte range per form, relative
    ///   to the text last given to `set_text`
    ///
    /// # Returns
    /// `false` once the text is exhausted; `forms` and `ranges` are left empty
    fn next_sentence(&mut self, forms: &mut Vec<String>, ranges: &mut Vec<TokenRange>) -> bool;

    /// Short name for diagnostics
    fn name(&self) -> &'static str;
}

impl<T: SentenceTokenizer + ?Sized> SentenceTokenizer for Box<T> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn next_sentence(&mut self, forms: &mut Vec<String>, ranges: &mut Vec<TokenRange>) -> bool {
        (**self).next_sentence(forms, ranges)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Morphological tagging engine
///
/// Engines are loaded once and then queried sentence by sentence. They are
/// read-only after loading; all per-call state lives in the buffers the caller
/// passes in.
pub trait TaggingEngine: Send + Sync {
    /// Tag one sentence
    ///
    /// # Arguments
    /// * `forms` - Word forms of the sentence, in order
    /// * `lemmas` - Cleared, then filled with one entry per form, same order
    /// * `use_guesser` - Whether unknown forms may be sent to the guesser
    fn tag(&self, forms: &[String], lemmas: &mut Vec<TaggedLemma>, use_guesser: bool);

    /// Create the tokenizer bundled with the model, if the model has one
    fn new_tokenizer(&self) -> Option<Box<dyn SentenceTokenizer>>;

    /// Whether the model carries a guesser for unknown forms
    fn has_guesser(&self) -> bool {
        false
    }
}
