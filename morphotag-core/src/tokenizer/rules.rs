//! Tokenizer rule tables
//!
//! Defines the TOML schema of `configs/tokenizers/*.toml` and compiles it into
//! the lookup structures used by [`RuleTokenizer`](super::RuleTokenizer).

use super::TokenizerKind;
use crate::error::{CoreError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

/// Root of a tokenizer rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub terminators: Terminators,
    #[serde(default)]
    pub words: Words,
    #[serde(default)]
    pub closers: Closers,
    #[serde(default)]
    pub normalize: Vec<Normalization>,
    #[serde(default)]
    pub patterns: Vec<TokenPattern>,
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
    /// A terminator followed by a lowercase word does not end the sentence
    #[serde(default)]
    pub lowercase_continues: bool,
    /// A single capital letter followed by "." is an initial, not a sentence end
    #[serde(default)]
    pub initials: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Words {
    /// Characters allowed between two alphanumeric characters of one word
    #[serde(default)]
    pub joiners: Vec<char>,
    /// Characters allowed between two digits of one number
    #[serde(default)]
    pub decimal_separators: Vec<char>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Closers {
    #[serde(default)]
    pub chars: Vec<char>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Normalization {
    pub from: char,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPattern {
    pub name: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// Compiled rule table
#[derive(Debug)]
pub struct TokenizerRules {
    kind: TokenizerKind,
    terminators: HashSet<char>,
    lowercase_continues: bool,
    initials: bool,
    joiners: HashSet<char>,
    decimal_separators: HashSet<char>,
    closers: HashSet<char>,
    normalize: HashMap<char, String>,
    patterns: Vec<(String, Regex)>,
    abbreviations: HashSet<String>,
}

impl TokenizerRules {
    /// Compile a parsed rule file
    pub fn from_config(kind: TokenizerKind, config: &RulesConfig) -> Result<Self> {
        let invalid = |reason: String| CoreError::InvalidRules {
            kind: kind.name().to_string(),
            reason,
        };

        if config.metadata.kind != kind.name() {
            return Err(invalid(format!(
                "table declares kind '{}'",
                config.metadata.kind
            )));
        }
        if config.terminators.chars.is_empty() {
            return Err(invalid("no terminator characters".to_string()));
        }

        let patterns = config
            .patterns
            .iter()
            .map(|p| {
                // Anchored at the cursor
                Regex::new(&format!("^(?:{})", p.pattern))
                    .map(|re| (p.name.clone(), re))
                    .map_err(|e| invalid(format!("pattern '{}': {e}", p.name)))
            })
            .collect::<Result<Vec<_>>>()?;

        let abbreviations = config
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|a| a.trim_end_matches('.').to_lowercase())
            .collect();

        Ok(Self {
            kind,
            terminators: config.terminators.chars.iter().copied().collect(),
            lowercase_continues: config.terminators.lowercase_continues,
            initials: config.terminators.initials,
            joiners: config.words.joiners.iter().copied().collect(),
            decimal_separators: config.words.decimal_separators.iter().copied().collect(),
            closers: config.closers.chars.iter().copied().collect(),
            normalize: config
                .normalize
                .iter()
                .map(|n| (n.from, n.to.clone()))
                .collect(),
            patterns,
            abbreviations,
        })
    }

    /// Parse and compile a TOML rule table
    pub fn from_toml(kind: TokenizerKind, source: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(source).map_err(|e| CoreError::InvalidRules {
            kind: kind.name().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_config(kind, &config)
    }

    /// Tokenizer kind this table belongs to
    pub fn kind(&self) -> TokenizerKind {
        self.kind
    }

    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    pub fn is_closer(&self, ch: char) -> bool {
        self.closers.contains(&ch)
    }

    pub fn is_joiner(&self, ch: char) -> bool {
        self.joiners.contains(&ch)
    }

    pub fn is_decimal_separator(&self, ch: char) -> bool {
        self.decimal_separators.contains(&ch)
    }

    pub fn lowercase_continues(&self) -> bool {
        self.lowercase_continues
    }

    pub fn initials(&self) -> bool {
        self.initials
    }

    /// Check whether `word` (without its trailing dot) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        !self.abbreviations.is_empty() && self.abbreviations.contains(&word.to_lowercase())
    }

    /// Length in bytes of the longest special pattern matching at the start of `rest`
    pub fn match_pattern(&self, rest: &str) -> Option<usize> {
        self.patterns
            .iter()
            .filter_map(|(_, re)| re.find(rest).map(|m| m.end()))
            .filter(|&len| len > 0)
            .max()
    }

    /// Apply the character normalization table to a token
    pub fn normalize(&self, token: &str) -> String {
        if self.normalize.is_empty() || !token.chars().any(|c| self.normalize.contains_key(&c)) {
            return token.to_string();
        }
        let mut out = String::with_capacity(token.len());
        for ch in token.chars() {
            match self.normalize.get(&ch) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out
    }
}

static GENERIC: OnceLock<std::result::Result<Arc<TokenizerRules>, String>> = OnceLock::new();
static CZECH: OnceLock<std::result::Result<Arc<TokenizerRules>, String>> = OnceLock::new();
static ENGLISH: OnceLock<std::result::Result<Arc<TokenizerRules>, String>> = OnceLock::new();

/// Get the compiled embedded rules for a rule-based tokenizer kind
///
/// Tables are parsed on first use and shared read-only afterwards.
pub fn rules_for(kind: TokenizerKind) -> Result<Arc<TokenizerRules>> {
    let (cell, source) = match kind {
        TokenizerKind::Generic => (&GENERIC, include_str!("../../configs/tokenizers/generic.toml")),
        TokenizerKind::Czech => (&CZECH, include_str!("../../configs/tokenizers/czech.toml")),
        TokenizerKind::English => (&ENGLISH, include_str!("../../configs/tokenizers/english.toml")),
        TokenizerKind::Vertical => {
            return Err(CoreError::InvalidRules {
                kind: kind.name().to_string(),
                reason: "the vertical tokenizer has no rule table".to_string(),
            })
        }
    };

    cell.get_or_init(|| {
        log::debug!("compiling {kind} tokenizer rules");
        TokenizerRules::from_toml(kind, source)
            .map(Arc::new)
            .map_err(|e| match e {
                CoreError::InvalidRules { reason, .. } => reason,
                other => other.to_string(),
            })
    })
    .clone()
    .map_err(|reason| CoreError::InvalidRules {
        kind: kind.name().to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_load() {
        for kind in [TokenizerKind::Generic, TokenizerKind::Czech, TokenizerKind::English] {
            let rules = rules_for(kind).unwrap();
            assert_eq!(rules.kind(), kind);
            assert!(rules.is_terminator('.'));
            assert!(rules.is_terminator('?'));
        }
    }

    #[test]
    fn test_vertical_has_no_table() {
        assert!(rules_for(TokenizerKind::Vertical).is_err());
    }

    #[test]
    fn test_czech_abbreviations() {
        let rules = rules_for(TokenizerKind::Czech).unwrap();
        assert!(rules.is_abbreviation("např"));
        assert!(rules.is_abbreviation("Např"));
        assert!(!rules.is_abbreviation("zima"));
    }

    #[test]
    fn test_generic_has_no_abbreviations() {
        let rules = rules_for(TokenizerKind::Generic).unwrap();
        assert!(!rules.is_abbreviation("dr"));
    }

    #[test]
    fn test_english_normalizes_apostrophe() {
        let rules = rules_for(TokenizerKind::English).unwrap();
        assert_eq!(rules.normalize("don\u{2019}t"), "don't");
        assert_eq!(rules.normalize("plain"), "plain");
    }

    #[test]
    fn test_url_pattern() {
        let rules = rules_for(TokenizerKind::Generic).unwrap();
        let rest = "https://example.org/a?b=c. Next";
        assert_eq!(rules.match_pattern(rest), Some("https://example.org/a?b=c".len()));
        assert_eq!(rules.match_pattern("plain words"), None);
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let source = r#"
[metadata]
kind = "czech"
name = "Czech"

[terminators]
chars = ["."]
"#;
        let err = TokenizerRules::from_toml(TokenizerKind::English, source).unwrap_err();
        assert!(err.to_string().contains("declares kind 'czech'"));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let source = r#"
[metadata]
kind = "generic"
name = "Generic"

[terminators]
chars = ["."]

[[patterns]]
name = "broken"
pattern = "(unclosed"
"#;
        let err = TokenizerRules::from_toml(TokenizerKind::Generic, source).unwrap_err();
        assert!(err.to_string().contains("pattern 'broken'"));
    }
}
