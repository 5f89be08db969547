//! Candidate filtering
//!
//! A [`CandidateFilter`] decides which tagged terms become graph vertices.
//! Terms it rejects are dropped before the co-occurrence window sees them.

use super::stopwords::StopwordSet;
use crate::errors::Result;
use crate::types::{KeywordConfig, TaggedTerm};

/// Predicate over tagged terms
pub trait CandidateFilter {
    /// Whether this term should take part in the graph
    fn should_include(&self, term: &TaggedTerm) -> bool;
}

impl<F> CandidateFilter for F
where
    F: Fn(&TaggedTerm) -> bool,
{
    #[inline]
    fn should_include(&self, term: &TaggedTerm) -> bool {
        self(term)
    }
}

/// Default filter: rejects function-word and punctuation tags, then
/// stopwords.
#[derive(Debug, Clone)]
pub struct PosStopwordFilter {
    stopwords: StopwordSet,
}

impl PosStopwordFilter {
    /// Filter with the given stopword set
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Filter for the language and extra stopwords named in the config
    pub fn from_config(config: &KeywordConfig) -> Result<Self> {
        let mut stopwords = StopwordSet::for_language(&config.language)?;
        stopwords.extend(&config.stopwords);
        Ok(Self::new(stopwords))
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

impl Default for PosStopwordFilter {
    fn default() -> Self {
        // "en" always has a built-in list
        Self::new(StopwordSet::for_language("en").unwrap_or_default())
    }
}

impl CandidateFilter for PosStopwordFilter {
    fn should_include(&self, term: &TaggedTerm) -> bool {
        if term.tag.is_function_tag() {
            return false;
        }
        !term.word.trim().is_empty() && !self.stopwords.contains(&term.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    #[test]
    fn test_default_filter_rejects_function_tags() {
        let filter = PosStopwordFilter::default();

        assert!(filter.should_include(&TaggedTerm::new("graph", PosTag::Noun)));
        assert!(filter.should_include(&TaggedTerm::new("propagate", PosTag::Verb)));
        assert!(!filter.should_include(&TaggedTerm::new(",", PosTag::Punctuation)));
        assert!(!filter.should_include(&TaggedTerm::new("42", PosTag::Numeral)));
        assert!(!filter.should_include(&TaggedTerm::new("graph", PosTag::Determiner)));
    }

    #[test]
    fn test_default_filter_rejects_stopwords() {
        let filter = PosStopwordFilter::default();

        // mistagged stopword still gets caught by the lexicon
        assert!(!filter.should_include(&TaggedTerm::new("the", PosTag::Noun)));
        assert!(!filter.should_include(&TaggedTerm::new("With", PosTag::Noun)));
    }

    #[test]
    fn test_filter_from_config_extra_stopwords() {
        let cfg = KeywordConfig::default().with_stopwords(["graph"]);
        let filter = PosStopwordFilter::from_config(&cfg).unwrap();

        assert!(!filter.should_include(&TaggedTerm::new("graph", PosTag::Noun)));
        assert!(filter.should_include(&TaggedTerm::new("vertex", PosTag::Noun)));
    }

    #[test]
    fn test_filter_from_config_bad_language() {
        let cfg = KeywordConfig::default().with_language("xx");
        assert!(PosStopwordFilter::from_config(&cfg).is_err());
    }

    #[test]
    fn test_closure_as_filter() {
        let nouns_only = |t: &TaggedTerm| t.tag == PosTag::Noun;

        assert!(nouns_only.should_include(&TaggedTerm::new("graph", PosTag::Noun)));
        assert!(!nouns_only.should_include(&TaggedTerm::new("fast", PosTag::Adverb)));
    }

    #[test]
    fn test_blank_word_rejected() {
        let filter = PosStopwordFilter::new(StopwordSet::default());
        assert!(!filter.should_include(&TaggedTerm::new("  ", PosTag::Noun)));
    }
}
