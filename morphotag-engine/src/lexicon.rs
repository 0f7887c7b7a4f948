//! Lexicon-based reference tagging engine
//!
//! Models are TOML files with a `[model]` header, an optional `[guesser]`
//! suffix table and a `[[lexicon]]` list of `form -> (lemma, tag)` entries.
//! Lookup order for a form:
//! 1. exact lexicon entry
//! 2. case-folded lexicon entry
//! 3. guesser suffix rule (longest suffix wins), if requested and present
//! 4. punctuation tag, for forms without alphanumeric characters
//! 5. the form itself as lemma with the unknown tag

use morphotag_core::{
    new_tokenizer, CoreError, Result, SentenceTokenizer, TaggedLemma, TaggingEngine, TokenizerKind,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const DEFAULT_UNKNOWN_TAG: &str = "X@-------------";
const DEFAULT_PUNCTUATION_TAG: &str = "Z:-------------";

#[derive(Debug, Deserialize)]
struct ModelFile {
    model: ModelSection,
    guesser: Option<GuesserSection>,
    #[serde(default)]
    lexicon: Vec<LexiconEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelSection {
    name: String,
    tokenizer: Option<String>,
    #[serde(default = "default_unknown_tag")]
    unknown_tag: String,
    #[serde(default = "default_punctuation_tag")]
    punctuation_tag: String,
}

fn default_unknown_tag() -> String {
    DEFAULT_UNKNOWN_TAG.to_string()
}

fn default_punctuation_tag() -> String {
    DEFAULT_PUNCTUATION_TAG.to_string()
}

#[derive(Debug, Deserialize)]
struct GuesserSection {
    #[serde(default)]
    rules: Vec<GuesserRule>,
}

/// One guesser rule: forms ending in `suffix` get `tag`, and their lemma is
/// the form with `strip` trailing characters replaced by `append`
#[derive(Debug, Clone, Deserialize)]
struct GuesserRule {
    suffix: String,
    #[serde(default)]
    strip: usize,
    #[serde(default)]
    append: String,
    tag: String,
}

#[derive(Debug, Deserialize)]
struct LexiconEntry {
    form: String,
    lemma: String,
    tag: String,
}

/// Suffix guesser for forms missing from the lexicon
#[derive(Debug, Clone)]
struct Guesser {
    /// Sorted by descending suffix length
    rules: Vec<GuesserRule>,
}

impl Guesser {
    fn new(mut rules: Vec<GuesserRule>) -> Self {
        for rule in &mut rules {
            rule.suffix = rule.suffix.to_lowercase();
        }
        rules.sort_by(|a, b| b.suffix.chars().count().cmp(&a.suffix.chars().count()));
        Self { rules }
    }

    fn guess(&self, form: &str, folded: &str) -> Option<TaggedLemma> {
        let rule = self
            .rules
            .iter()
            .find(|rule| folded.ends_with(&rule.suffix) && folded.len() > rule.suffix.len())?;

        let keep = form.chars().count().saturating_sub(rule.strip);
        let mut lemma: String = form.chars().take(keep).collect();
        lemma.push_str(&rule.append);
        Some(TaggedLemma::new(lemma, rule.tag.clone()))
    }
}

/// Reference [`TaggingEngine`] backed by a TOML lexicon
#[derive(Debug, Clone)]
pub struct LexiconEngine {
    name: String,
    tokenizer: Option<TokenizerKind>,
    unknown_tag: String,
    punctuation_tag: String,
    exact: HashMap<String, TaggedLemma>,
    folded: HashMap<String, TaggedLemma>,
    guesser: Option<Guesser>,
}

impl LexiconEngine {
    /// Load a model file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| CoreError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source).map_err(|reason| CoreError::ModelLoad {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse a model from TOML source
    pub fn from_toml(source: &str) -> std::result::Result<Self, String> {
        let file: ModelFile = toml::from_str(source).map_err(|e| e.to_string())?;

        let tokenizer = file
            .model
            .tokenizer
            .as_deref()
            .map(str::parse::<TokenizerKind>)
            .transpose()
            .map_err(|e| e.to_string())?;

        let mut exact = HashMap::with_capacity(file.lexicon.len());
        let mut folded = HashMap::with_capacity(file.lexicon.len());
        for entry in file.lexicon {
            let analysis = TaggedLemma::new(entry.lemma, entry.tag);
            // First entry for a form wins; later ones are alternative readings
            folded
                .entry(entry.form.to_lowercase())
                .or_insert_with(|| analysis.clone());
            exact.entry(entry.form).or_insert(analysis);
        }

        log::debug!(
            "model '{}': {} forms, tokenizer {:?}, guesser {}",
            file.model.name,
            exact.len(),
            tokenizer,
            file.guesser.is_some()
        );

        Ok(Self {
            name: file.model.name,
            tokenizer,
            unknown_tag: file.model.unknown_tag,
            punctuation_tag: file.model.punctuation_tag,
            exact,
            folded,
            guesser: file.guesser.map(|g| Guesser::new(g.rules)),
        })
    }

    /// Model name from the `[model]` header
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokenizer variant bundled with the model
    pub fn tokenizer_kind(&self) -> Option<TokenizerKind> {
        self.tokenizer
    }

    /// Number of distinct forms in the lexicon
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    fn analyze(&self, form: &str, use_guesser: bool) -> TaggedLemma {
        if let Some(analysis) = self.exact.get(form) {
            return analysis.clone();
        }
        let folded = form.to_lowercase();
        if let Some(analysis) = self.folded.get(&folded) {
            return analysis.clone();
        }
        if use_guesser {
            if let Some(analysis) = self.guesser.as_ref().and_then(|g| g.guess(form, &folded)) {
                return analysis;
            }
        }
        if !form.is_empty() && !form.chars().any(char::is_alphanumeric) {
            return TaggedLemma::new(form, self.punctuation_tag.clone());
        }
        TaggedLemma::new(form, self.unknown_tag.clone())
    }
}

impl TaggingEngine for LexiconEngine {
    fn tag(&self, forms: &[String], lemmas: &mut Vec<TaggedLemma>, use_guesser: bool) {
        lemmas.clear();
        lemmas.extend(forms.iter().map(|form| self.analyze(form, use_guesser)));
    }

    fn new_tokenizer(&self) -> Option<Box<dyn SentenceTokenizer>> {
        let kind = self.tokenizer?;
        match new_tokenizer(kind) {
            Ok(tokenizer) => Some(tokenizer),
            Err(e) => {
                log::warn!("model '{}': cannot create {kind} tokenizer: {e}", self.name);
                None
            }
        }
    }

    fn has_guesser(&self) -> bool {
        self.guesser.is_some()
    }
}
