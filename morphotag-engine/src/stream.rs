//! Lazy token and sentence streams
//!
//! Both streams share a [`Driver`] that pulls one sentence at a time from the
//! driving tokenizer, tags it into the tagger's scratch buffers and rebuilds
//! words from the input bytes. A stream holds the tagger mutably for its whole
//! lifetime; once it reports an error it is fused and yields nothing more.

use crate::error::Result;
use crate::scratch::Scratch;
use morphotag_core::{SentenceTokenizer, TaggingEngine, Token, VerticalTokenizer};
use std::vec;

/// Where sentences come from
pub(crate) enum Source<'a> {
    /// Raw text split by the model's tokenizer
    Raw {
        tokenizer: &'a mut Box<dyn SentenceTokenizer>,
        text: String,
    },
    /// Pre-tokenized sentences, each joined by newlines and split again by
    /// the line tokenizer
    Segmented {
        tokenizer: &'a mut VerticalTokenizer,
        sentences: vec::IntoIter<Vec<String>>,
        text: String,
    },
}

impl<'a> Source<'a> {
    pub(crate) fn raw(tokenizer: &'a mut Box<dyn SentenceTokenizer>, text: String) -> Self {
        tokenizer.set_text(&text);
        Source::Raw { tokenizer, text }
    }

    pub(crate) fn segmented(tokenizer: &'a mut VerticalTokenizer, sentences: Vec<Vec<String>>) -> Self {
        tokenizer.set_text("");
        Source::Segmented {
            tokenizer,
            sentences: sentences.into_iter(),
            text: String::new(),
        }
    }

    fn text(&self) -> &str {
        match self {
            Source::Raw { text, .. } | Source::Segmented { text, .. } => text,
        }
    }

    fn tokenizer_name(&self) -> &'static str {
        match self {
            Source::Raw { tokenizer, .. } => tokenizer.name(),
            Source::Segmented { tokenizer, .. } => tokenizer.name(),
        }
    }

    /// Fill `scratch` with the next sentence; `false` once input is exhausted
    fn next_sentence(&mut self, scratch: &mut Scratch) -> bool {
        match self {
            Source::Raw { tokenizer, .. } => {
                tokenizer.next_sentence(&mut scratch.forms, &mut scratch.ranges)
            }
            Source::Segmented {
                tokenizer,
                sentences,
                text,
            } => loop {
                if tokenizer.next_sentence(&mut scratch.forms, &mut scratch.ranges) {
                    return true;
                }
                let Some(sentence) = sentences.next() else {
                    return false;
                };
                *text = sentence.join("\n");
                tokenizer.set_text(text.as_str());
            },
        }
    }
}

/// Shared sentence loop behind both stream types
pub(crate) struct Driver<'a> {
    engine: &'a dyn TaggingEngine,
    scratch: &'a mut Scratch,
    source: Source<'a>,
    use_guesser: bool,
    sentences: usize,
    done: bool,
}

impl<'a> Driver<'a> {
    pub(crate) fn new(
        engine: &'a dyn TaggingEngine,
        scratch: &'a mut Scratch,
        source: Source<'a>,
        use_guesser: bool,
    ) -> Self {
        scratch.clear();
        Self {
            engine,
            scratch,
            source,
            use_guesser,
            sentences: 0,
            done: false,
        }
    }

    /// Tag the next sentence into scratch
    ///
    /// Returns `Ok(false)` when the input is exhausted or the stream already
    /// failed.
    fn advance(&mut self) -> Result<bool> {
        if self.done {
            return Ok(false);
        }

        self.scratch.lemmas.clear();
        if !self.source.next_sentence(self.scratch) {
            self.done = true;
            log::debug!("stream finished after {} sentences", self.sentences);
            return Ok(false);
        }

        let checked = self.scratch.check_ranges(self.source.tokenizer_name());
        self.fail_on_error(checked)?;

        self.engine
            .tag(&self.scratch.forms, &mut self.scratch.lemmas, self.use_guesser);
        let checked = self.scratch.check_lemmas();
        self.fail_on_error(checked)?;

        self.sentences += 1;
        log::trace!(
            "sentence {}: {} tokens",
            self.sentences,
            self.scratch.len()
        );
        Ok(true)
    }

    fn token(&mut self, index: usize) -> Result<Token> {
        let result = self.scratch.token(self.source.text(), index);
        self.fail_on_error(result)
    }

    fn sentence(&mut self) -> Result<Vec<Token>> {
        let text = self.source.text();
        let result: Result<Vec<Token>> = (0..self.scratch.len())
            .map(|index| self.scratch.token(text, index))
            .collect();
        self.fail_on_error(result)
    }

    fn fail_on_error<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            log::error!("tagging stopped: {e}");
            self.done = true;
        }
        result
    }
}

/// Flat stream of tokens, sentence boundaries not observable
///
/// Created by [`Tagger::tag`](crate::Tagger::tag).
pub struct TokenStream<'a> {
    driver: Driver<'a>,
    next_index: usize,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn new(driver: Driver<'a>) -> Self {
        Self {
            driver,
            next_index: 0,
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index >= self.driver.scratch.len() {
            match self.driver.advance() {
                Ok(true) => self.next_index = 0,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        if self.driver.done {
            return None;
        }

        let token = self.driver.token(self.next_index);
        self.next_index += 1;
        Some(token)
    }
}

impl std::iter::FusedIterator for TokenStream<'_> {}

/// Stream of sentences, each a fully realized list of tokens
///
/// Created by [`Tagger::tag_sentences`](crate::Tagger::tag_sentences).
pub struct SentenceStream<'a> {
    driver: Driver<'a>,
}

impl<'a> SentenceStream<'a> {
    pub(crate) fn new(driver: Driver<'a>) -> Self {
        Self { driver }
    }
}

impl Iterator for SentenceStream<'_> {
    type Item = Result<Vec<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.driver.advance() {
            Ok(true) => Some(self.driver.sentence()),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for SentenceStream<'_> {}

impl std::fmt::Debug for TokenStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStream")
            .field("next_index", &self.next_index)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for SentenceStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceStream").finish_non_exhaustive()
    }
}
