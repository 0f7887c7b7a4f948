//! Data model and collaborator contracts for morphological tagging
//!
//! This crate holds everything the tagging pipeline shares with its
//! collaborators:
//! - **Types**: [`Token`], [`TaggedLemma`] and [`TokenRange`]
//! - **Traits**: [`SentenceTokenizer`] and [`TaggingEngine`], the contracts a
//!   tokenizer or tagging engine has to fulfil
//! - **Tokenizers**: the built-in `vertical`, `generic`, `czech` and
//!   `english` variants, created through [`new_tokenizer`]
//!
//! # Example
//!
//! ```rust
//! use morphotag_core::{new_tokenizer, TokenizerKind};
//!
//! let mut tokenizer = new_tokenizer(TokenizerKind::Czech).unwrap();
//! tokenizer.set_text("Je zima. Bude sněžit.");
//!
//! let mut forms = Vec::new();
//! let mut ranges = Vec::new();
//! let mut sentences = 0;
//! while tokenizer.next_sentence(&mut forms, &mut ranges) {
//!     sentences += 1;
//! }
//! assert_eq!(sentences, 2);
//! ```

pub mod error;
pub mod tokenizer;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result};
pub use tokenizer::{new_tokenizer, RuleTokenizer, TokenizerKind, VerticalTokenizer};
pub use traits::{SentenceTokenizer, TaggingEngine};
pub use types::{TaggedLemma, Token, TokenRange};
