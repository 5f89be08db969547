//! Stopword lexicons
//!
//! Built-in lists come from the `stop-words` crate; callers can extend them
//! with their own words. Lookups are case-insensitive.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A case-insensitive set of stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    /// Lowercased words
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// Built-in lexicon for a language code or name.
    ///
    /// Unknown languages are a configuration error rather than a silent
    /// fallback.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            other => {
                return Err(TextRankError::invalid_config(format!(
                    "no stopword list for language '{other}'"
                )))
            }
        };

        Ok(Self {
            words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// A set holding exactly the given words
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add more words to the set
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Check if a word is a stopword
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // avoid allocating for the common already-lowercase case
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lexicon() {
        let set = StopwordSet::for_language("en").unwrap();
        assert!(!set.is_empty());
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(!set.contains("graph"));
    }

    #[test]
    fn test_language_aliases() {
        let by_code = StopwordSet::for_language("de").unwrap();
        let by_name = StopwordSet::for_language("German").unwrap();
        assert_eq!(by_code.len(), by_name.len());
        assert!(by_code.contains("und"));
    }

    #[test]
    fn test_unknown_language_is_error() {
        let err = StopwordSet::for_language("klingon").unwrap_err();
        assert!(matches!(err, TextRankError::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_list_and_extend() {
        let mut set = StopwordSet::from_list(["Foo", "bar"]);
        assert!(set.contains("foo"));
        assert!(set.contains("BAR"));
        assert!(!set.contains("baz"));

        set.extend(["baz"]);
        assert!(set.contains("baz"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_default_is_empty() {
        let set = StopwordSet::default();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }
}
