//! Core error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the built-in collaborators
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tokenizer name does not map to a known variant
    #[error("unknown tokenizer '{name}' (expected one of: vertical, czech, english, generic)")]
    UnknownTokenizer {
        /// The name that was requested
        name: String,
    },

    /// An embedded tokenizer rule table failed to parse
    #[error("invalid tokenizer rules for '{kind}': {reason}")]
    InvalidRules {
        /// Tokenizer kind whose table is broken
        kind: String,
        /// Parser or validation message
        reason: String,
    },

    /// Model data could not be loaded
    #[error("unable to load model from {path:?}: {reason}")]
    ModelLoad {
        /// Path the model was requested from
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
