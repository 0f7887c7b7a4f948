//! Tagger and its constructors

use crate::{
    config::{TagOptions, TaggerConfig},
    error::{Result, TaggerError},
    input::Input,
    lexicon::LexiconEngine,
    scratch::Scratch,
    stream::{Driver, SentenceStream, Source, TokenStream},
};
use morphotag_core::{SentenceTokenizer, TaggingEngine, VerticalTokenizer};
use std::path::Path;
use std::sync::Arc;

/// Morphological tagger
///
/// Couples a loaded [`TaggingEngine`] with the model's tokenizer, a line
/// tokenizer for pre-tokenized input and the per-sentence scratch buffers.
/// Streams borrow the tagger mutably, so one instance serves one stream at a
/// time; use [`Tagger::fork`] for an independent instance over the same model.
pub struct Tagger {
    engine: Arc<dyn TaggingEngine>,
    label: String,
    tokenizer: Option<Box<dyn SentenceTokenizer>>,
    vertical: VerticalTokenizer,
    scratch: Scratch,
    guesser: bool,
}

impl Tagger {
    /// Load a lexicon model from `path`
    ///
    /// `guesser` becomes the default for [`TagOptions::use_guesser`].
    pub fn load<P: AsRef<Path>>(path: P, guesser: bool) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading tagger model from {}", path.display());
        let engine = LexiconEngine::load(path)?;
        log::info!(
            "Loaded model '{}' with {} forms",
            engine.name(),
            engine.len()
        );
        Ok(Self::with_engine(engine, path.display().to_string(), guesser))
    }

    /// Create a tagger from a configuration
    pub fn from_config(config: &TaggerConfig) -> Result<Self> {
        Self::load(&config.model, config.guesser)
    }

    /// Wrap an arbitrary engine
    ///
    /// `label` names the model in diagnostics and errors.
    pub fn with_engine<E>(engine: E, label: impl Into<String>, guesser: bool) -> Self
    where
        E: TaggingEngine + 'static,
    {
        Self::with_shared_engine(Arc::new(engine), label, guesser)
    }

    /// Wrap an engine shared with other taggers
    pub fn with_shared_engine(
        engine: Arc<dyn TaggingEngine>,
        label: impl Into<String>,
        guesser: bool,
    ) -> Self {
        let label = label.into();
        let tokenizer = engine.new_tokenizer();

        if tokenizer.is_none() {
            log::warn!(
                "No tokenizer defined for tagger {label:?}; only pre-tokenized input can be tagged"
            );
        }
        if guesser && !engine.has_guesser() {
            log::warn!("Tagger {label:?} has no guesser; unknown forms will not be guessed");
        }

        Self {
            engine,
            label,
            tokenizer,
            vertical: VerticalTokenizer::new(),
            scratch: Scratch::default(),
            guesser,
        }
    }

    /// Independent tagger over the same engine, with fresh tokenizers and buffers
    pub fn fork(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            label: self.label.clone(),
            tokenizer: self.engine.new_tokenizer(),
            vertical: VerticalTokenizer::new(),
            scratch: Scratch::default(),
            guesser: self.guesser,
        }
    }

    /// Label of the model, usually its path
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether raw text can be tagged
    pub fn has_tokenizer(&self) -> bool {
        self.tokenizer.is_some()
    }

    /// Whether the model carries a guesser
    pub fn has_guesser(&self) -> bool {
        self.engine.has_guesser()
    }

    /// Options matching the constructor's guesser flag
    pub fn default_options(&self) -> TagOptions {
        TagOptions {
            use_guesser: self.guesser,
        }
    }

    /// Tag `input` into a flat stream of tokens
    ///
    /// # Errors
    /// [`TaggerError::NoTokenizer`] for raw text on a model without a
    /// tokenizer and [`TaggerError::InvalidInput`] for empty pre-tokenized
    /// input; both before any token is produced. The stream itself yields
    /// [`TaggerError::EngineContract`] if a collaborator misbehaves.
    pub fn tag(&mut self, input: Input, options: TagOptions) -> Result<TokenStream<'_>> {
        self.driver(input, options).map(TokenStream::new)
    }

    /// Tag `input` into a stream of sentences
    ///
    /// Errors as for [`Tagger::tag`].
    pub fn tag_sentences(&mut self, input: Input, options: TagOptions) -> Result<SentenceStream<'_>> {
        self.driver(input, options).map(SentenceStream::new)
    }

    fn driver(&mut self, input: Input, options: TagOptions) -> Result<Driver<'_>> {
        input.validate()?;

        let source = match input {
            Input::RawText(text) => {
                let tokenizer = self.tokenizer.as_mut().ok_or_else(|| TaggerError::NoTokenizer {
                    model: self.label.clone(),
                })?;
                Source::raw(tokenizer, text)
            }
            Input::Segmented(sentences) => Source::segmented(&mut self.vertical, sentences),
        };

        let use_guesser = options.use_guesser && self.engine.has_guesser();
        Ok(Driver::new(
            self.engine.as_ref(),
            &mut self.scratch,
            source,
            use_guesser,
        ))
    }
}

impl std::fmt::Debug for Tagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagger")
            .field("label", &self.label)
            .field("tokenizer", &self.tokenizer.as_ref().map(|t| t.name()))
            .field("guesser", &self.guesser)
            .finish_non_exhaustive()
    }
}
