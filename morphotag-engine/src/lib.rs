//! Morphological tagging pipeline
//!
//! This crate turns raw or pre-tokenized text into `(word, lemma, tag)`
//! tokens:
//! - [`Tokenizer`]: sentence splitting and tokenization on its own
//! - [`Tagger`]: tokenizes, tags sentence by sentence and hands out tokens
//!   lazily, either flat ([`TokenStream`]) or grouped by sentence
//!   ([`SentenceStream`])
//! - [`LexiconEngine`]: the reference [`TaggingEngine`], loaded from a TOML
//!   model
//!
//! # Example
//!
//! ```rust
//! use morphotag_engine::{Input, LexiconEngine, TagOptions, Tagger};
//!
//! let model = r#"
//! [model]
//! name = "demo"
//! tokenizer = "czech"
//!
//! [[lexicon]]
//! form = "zima"
//! lemma = "zima-1"
//! tag = "NNFS1-----A----"
//! "#;
//! let engine = LexiconEngine::from_toml(model).unwrap();
//! let mut tagger = Tagger::with_engine(engine, "demo", false);
//!
//! let sentences: Vec<_> = tagger
//!     .tag_sentences(Input::raw("Je zima. Bude sněžit."), TagOptions::default())
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0][1].lemma, "zima-1");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
mod scratch;
pub mod stream;
pub mod tagger;
pub mod tokenizer;

// Re-export key types
pub use config::{TagOptions, TaggerConfig, TaggerConfigBuilder};
pub use error::{Result, TaggerError};
pub use input::Input;
pub use lexicon::LexiconEngine;
pub use stream::{SentenceStream, TokenStream};
pub use tagger::Tagger;
pub use tokenizer::{Sentences, SentencesWithRanges, Tokenizer};

// Re-export from core for convenience
pub use morphotag_core::{
    SentenceTokenizer, TaggedLemma, TaggingEngine, Token, TokenRange, TokenizerKind,
};
