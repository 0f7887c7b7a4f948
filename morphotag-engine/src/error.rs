//! Layered error types
//!
//! Construction errors, caller errors detected before a stream exists, and
//! collaborator faults detected while a stream is running.

use morphotag_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Tagger-level errors
#[derive(Error, Debug)]
pub enum TaggerError {
    /// Model data could not be loaded
    #[error("unable to load tagger from {path:?}: {reason}")]
    ModelLoad {
        /// Path the model was requested from
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// Raw text was given to a tagger whose model has no tokenizer
    #[error("no tokenizer defined for tagger {model:?}! Please provide pre-tokenized and sentence-split input")]
    NoTokenizer {
        /// Label of the model (usually its path)
        model: String,
    },

    /// The input is neither raw text nor a non-empty list of tokenized sentences
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What is wrong with the input
        reason: String,
    },

    /// The engine or tokenizer broke its contract mid-stream
    #[error("engine contract violated: {reason}")]
    EngineContract {
        /// Description of the violation
        reason: String,
    },

    /// Core collaborator error
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for TaggerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ModelLoad { path, reason } => TaggerError::ModelLoad { path, reason },
            other => TaggerError::Core(other),
        }
    }
}

impl TaggerError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        TaggerError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn contract(reason: impl Into<String>) -> Self {
        TaggerError::EngineContract {
            reason: reason.into(),
        }
    }
}

/// Result type for tagger operations
pub type Result<T> = std::result::Result<T, TaggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tokenizer_message_names_model() {
        let error = TaggerError::NoTokenizer {
            model: "models/plain.toml".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("\"models/plain.toml\""));
        assert!(message.contains("pre-tokenized"));
    }

    #[test]
    fn test_core_model_load_is_flattened() {
        let error: TaggerError = CoreError::ModelLoad {
            path: PathBuf::from("missing.toml"),
            reason: "not found".to_string(),
        }
        .into();
        assert!(matches!(error, TaggerError::ModelLoad { .. }));
    }

    #[test]
    fn test_unknown_tokenizer_stays_core() {
        let error: TaggerError = CoreError::UnknownTokenizer {
            name: "x".to_string(),
        }
        .into();
        assert!(matches!(error, TaggerError::Core(CoreError::UnknownTokenizer { .. })));
        assert!(error.to_string().contains("unknown tokenizer 'x'"));
    }
}
