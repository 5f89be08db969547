//! Tokenization
//!
//! The [`Tokenizer`] trait is the seam between raw text and the ranking
//! core. [`WordTokenizer`] is a lightweight default: Unicode word
//! boundaries (UAX #29) plus a small closed-class lexicon for tagging.
//! Callers with a real POS tagger should implement [`Tokenizer`] instead,
//! or bypass tokenization through `score_from_terms`.

use crate::errors::{Result, TextRankError};
use crate::types::{PosTag, TaggedTerm};
use unicode_segmentation::UnicodeSegmentation;

/// Turns text into an ordered sequence of tagged terms
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedTerm>>;
}

/// Default tokenizer built on Unicode word segmentation
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    /// Lowercase words after tagging
    lowercase: bool,
    /// Fail instead of producing more tokens than this
    max_tokens: Option<usize>,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            lowercase: true,
            max_tokens: None,
        }
    }

    /// Keep or fold case in the emitted words
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Reject documents producing more than `max` tokens
    pub fn with_max_tokens(mut self, max: Option<usize>) -> Self {
        self.max_tokens = max;
        self
    }

    /// Tag a single segment. `sentence_start` marks the first word of a
    /// sentence, where capitalization says nothing about proper nouns.
    fn tag(segment: &str, sentence_start: bool) -> PosTag {
        if segment.chars().all(|c| c.is_ascii_punctuation() || is_unicode_punct(c)) {
            return PosTag::Punctuation;
        }
        if !segment.chars().any(char::is_alphanumeric) {
            return PosTag::Symbol;
        }
        if segment
            .chars()
            .all(|c| c.is_numeric() || matches!(c, '.' | ',' | '_'))
        {
            return PosTag::Numeral;
        }

        let lower = segment.to_lowercase();
        if let Some(tag) = closed_class(&lower) {
            return tag;
        }

        let capitalized = segment.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return PosTag::ProperNoun;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        PosTag::Noun
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<TaggedTerm>> {
        let mut terms = Vec::new();
        let mut sentence_start = true;

        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            let tag = Self::tag(segment, sentence_start);
            sentence_start = tag == PosTag::Punctuation
                && segment.chars().any(|c| matches!(c, '.' | '!' | '?' | '。' | '！' | '？'));

            let word = if self.lowercase {
                segment.to_lowercase()
            } else {
                segment.to_string()
            };
            terms.push(TaggedTerm::new(word, tag));

            if let Some(max) = self.max_tokens {
                if terms.len() > max {
                    return Err(TextRankError::tokenization(format!(
                        "document exceeds {max} tokens"
                    )));
                }
            }
        }

        Ok(terms)
    }
}

fn is_unicode_punct(c: char) -> bool {
    matches!(
        c,
        '“' | '”' | '‘' | '’' | '—' | '–' | '…' | '«' | '»' | '。' | '，' | '、' | '！' | '？'
            | '；' | '：' | '（' | '）'
    )
}

/// Closed-class English words and their tags
fn closed_class(word: &str) -> Option<PosTag> {
    let tag = match word {
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "each" | "every" | "some"
        | "any" | "no" | "all" | "both" | "either" | "neither" => PosTag::Determiner,
        "i" | "me" | "my" | "you" | "your" | "he" | "him" | "his" | "she" | "her" | "it"
        | "its" | "we" | "us" | "our" | "they" | "them" | "their" | "who" | "whom" | "which"
        | "what" | "itself" | "themselves" => PosTag::Pronoun,
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "into" | "onto" | "over"
        | "under" | "about" | "between" | "through" | "during" | "without" | "within"
        | "across" | "among" | "after" | "before" | "via" => PosTag::Preposition,
        "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while" | "although"
        | "though" | "whereas" | "unless" | "than" => PosTag::Conjunction,
        "to" | "not" | "'s" => PosTag::Particle,
        "oh" | "ah" | "wow" | "hey" | "ouch" => PosTag::Interjection,
        _ => return None,
    };
    Some(tag)
}
