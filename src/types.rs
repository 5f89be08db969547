//! Core types for textrank_keyword
//!
//! Tagged terms handed over by the tokenizer, part-of-speech tags, and the
//! extraction configuration.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

/// Default damping factor (share of score propagated along edges)
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Default cap on power-iteration rounds
pub const DEFAULT_MAX_ITERATIONS: usize = 200;
/// Default convergence threshold on the largest per-vertex change
pub const DEFAULT_MIN_DIFF: f64 = 0.001;
/// Default co-occurrence window, counted over included words
pub const DEFAULT_WINDOW_SIZE: usize = 5;
/// Default number of keywords returned by [`crate::KeywordExtractor::keywords`]
pub const DEFAULT_TOP_N: usize = 10;

// ============================================================================
// Part-of-speech tags
// ============================================================================

/// Part-of-speech tags (Universal Dependencies coarse set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

impl PosTag {
    /// Closed-class and non-word tags. Terms carrying these never make good
    /// keywords.
    pub fn is_function_tag(&self) -> bool {
        matches!(
            self,
            PosTag::Pronoun
                | PosTag::Determiner
                | PosTag::Preposition
                | PosTag::Conjunction
                | PosTag::Interjection
                | PosTag::Numeral
                | PosTag::Particle
                | PosTag::Punctuation
                | PosTag::Symbol
        )
    }

    /// Parse a UD-style tag string (`NOUN`, `PROPN`, `PUNCT`, ...)
    pub fn from_universal(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// The UD tag string for this tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

// ============================================================================
// Tagged term
// ============================================================================

/// A word with its part-of-speech tag, as produced by a tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedTerm {
    /// The word as it will appear in the graph
    pub word: String,
    /// Part-of-speech tag
    pub tag: PosTag,
}

impl TaggedTerm {
    pub fn new(word: impl Into<String>, tag: PosTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyword extraction
///
/// Every field has a serde default, so a JSON document only needs to name
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Damping factor `d` (typically 0.85)
    pub damping: f64,
    /// Maximum number of power-iteration rounds
    pub max_iterations: usize,
    /// Stop once no score moved by more than this in one round
    pub min_diff: f64,
    /// Co-occurrence window size over the filtered word stream
    pub window_size: usize,
    /// Number of keywords returned when no explicit count is given
    pub top_n: usize,
    /// Language code for the built-in stopword lexicon (e.g., "en", "de")
    pub language: String,
    /// Additional stopwords, merged into the built-in lexicon
    pub stopwords: Vec<String>,
    /// Reject documents producing more tokens than this
    pub max_tokens: Option<usize>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_diff: DEFAULT_MIN_DIFF,
            window_size: DEFAULT_WINDOW_SIZE,
            top_n: DEFAULT_TOP_N,
            language: "en".to_string(),
            stopwords: Vec::new(),
            max_tokens: None,
        }
    }
}

impl KeywordConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON, filling omitted fields with defaults.
    ///
    /// The parsed config is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TextRankError::invalid_config(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if self.min_diff.is_nan() || self.min_diff < 0.0 {
            return Err(TextRankError::invalid_config(format!(
                "min_diff must be >= 0, got {}",
                self.min_diff
            )));
        }

        if self.window_size < 2 {
            return Err(TextRankError::invalid_config("window_size must be >= 2"));
        }

        if self.max_tokens == Some(0) {
            return Err(TextRankError::invalid_config("max_tokens must be > 0"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_min_diff(mut self, min_diff: f64) -> Self {
        self.min_diff = min_diff;
        self
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set default keyword count
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: cap the number of tokens per document
    pub fn with_max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_universal_roundtrip() {
        for tag in [
            PosTag::Noun,
            PosTag::Adjective,
            PosTag::Punctuation,
            PosTag::ProperNoun,
            PosTag::Numeral,
        ] {
            assert_eq!(PosTag::from_universal(tag.as_str()), tag);
        }
        assert_eq!(PosTag::from_universal("propn"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_universal("sconj"), PosTag::Conjunction);
        assert_eq!(PosTag::from_universal("???"), PosTag::Other);
    }

    #[test]
    fn test_function_tags() {
        assert!(PosTag::Punctuation.is_function_tag());
        assert!(PosTag::Determiner.is_function_tag());
        assert!(!PosTag::Noun.is_function_tag());
        assert!(!PosTag::Verb.is_function_tag());
        assert!(!PosTag::Other.is_function_tag());
    }

    #[test]
    fn test_default_config() {
        let cfg = KeywordConfig::default();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.max_iterations, 200);
        assert_eq!(cfg.min_diff, 0.001);
        assert_eq!(cfg.window_size, 5);
        assert_eq!(cfg.top_n, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(KeywordConfig::default().with_damping(1.5).validate().is_err());
        assert!(KeywordConfig::default().with_damping(-0.1).validate().is_err());
        assert!(KeywordConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(KeywordConfig::default()
            .with_min_diff(f64::NAN)
            .validate()
            .is_err());
        assert!(KeywordConfig::default()
            .with_min_diff(-1.0)
            .validate()
            .is_err());
        assert!(KeywordConfig::default().with_window_size(1).validate().is_err());
        assert!(KeywordConfig::default().with_max_tokens(0).validate().is_err());

        // zero threshold is allowed: iterate until the cap
        assert!(KeywordConfig::default().with_min_diff(0.0).validate().is_ok());
    }

    #[test]
    fn test_config_from_json_partial() {
        let cfg = KeywordConfig::from_json(r#"{ "window_size": 3, "top_n": 4 }"#).unwrap();
        assert_eq!(cfg.window_size, 3);
        assert_eq!(cfg.top_n, 4);
        assert_eq!(cfg.damping, DEFAULT_DAMPING);
        assert_eq!(cfg.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(cfg.max_tokens.is_none());
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let err = KeywordConfig::from_json(r#"{ "damping": 2.0 }"#).unwrap_err();
        assert!(matches!(err, TextRankError::InvalidConfig(_)));

        let err = KeywordConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TextRankError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_builder_stopwords() {
        let cfg = KeywordConfig::default()
            .with_language("de")
            .with_stopwords(["foo", "bar"]);
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.stopwords, vec!["foo".to_string(), "bar".to_string()]);
    }
}
