//! Tagger configuration

use crate::error::{Result, TaggerError};
use std::path::PathBuf;

/// Per-call tagging options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions {
    /// Send unknown forms to the model's guesser (ignored if it has none)
    pub use_guesser: bool,
}

impl TagOptions {
    /// Options with the guesser enabled
    pub fn with_guesser() -> Self {
        Self { use_guesser: true }
    }
}

/// Configuration for constructing a [`Tagger`](crate::Tagger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Path to the model file
    pub model: PathBuf,
    /// Default for [`TagOptions::use_guesser`] on this tagger
    pub guesser: bool,
}

impl TaggerConfig {
    /// Create a configuration for the given model path
    pub fn new<P: Into<PathBuf>>(model: P) -> Self {
        Self {
            model: model.into(),
            guesser: false,
        }
    }

    /// Create a builder
    pub fn builder() -> TaggerConfigBuilder {
        TaggerConfigBuilder::default()
    }
}

/// Builder for [`TaggerConfig`]
#[derive(Debug, Default)]
pub struct TaggerConfigBuilder {
    model: Option<PathBuf>,
    guesser: bool,
}

impl TaggerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model path
    pub fn model<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.model = Some(path.into());
        self
    }

    /// Enable or disable the guesser by default
    pub fn guesser(mut self, enabled: bool) -> Self {
        self.guesser = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<TaggerConfig> {
        let model = self.model.ok_or_else(|| TaggerError::ModelLoad {
            path: PathBuf::new(),
            reason: "no model path configured".to_string(),
        })?;

        Ok(TaggerConfig {
            model,
            guesser: self.guesser,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = TaggerConfig::builder()
            .model("models/czech-demo.toml")
            .guesser(true)
            .build()
            .unwrap();
        assert_eq!(config.model, PathBuf::from("models/czech-demo.toml"));
        assert!(config.guesser);
    }

    #[test]
    fn test_builder_requires_model() {
        let err = TaggerConfigBuilder::new().guesser(true).build().unwrap_err();
        assert!(matches!(err, TaggerError::ModelLoad { .. }));
    }

    #[test]
    fn test_defaults() {
        assert!(!TaggerConfig::new("m.toml").guesser);
        assert!(!TagOptions::default().use_guesser);
        assert!(TagOptions::with_guesser().use_guesser);
    }
}
