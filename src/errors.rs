//! Error types for keyword extraction
//!
//! Graph construction, ranking and selection never fail. Errors only come
//! from the tokenizer, from invalid configuration, or from a caller handing
//! in an argument that breaks the API contract.

use thiserror::Error;

/// Errors raised by the extraction pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextRankError {
    /// The tokenizer rejected the input
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// A caller-supplied argument violates the API contract
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values are out of range or could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TextRankError {
    pub fn tokenization(msg: impl Into<String>) -> Self {
        Self::Tokenization(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TextRankError::tokenization("too many tokens");
        assert_eq!(err.to_string(), "tokenization failed: too many tokens");

        let err = TextRankError::invalid_argument("document is absent");
        assert_eq!(err.to_string(), "invalid argument: document is absent");

        let err = TextRankError::invalid_config("window_size must be >= 2");
        assert_eq!(
            err.to_string(),
            "invalid configuration: window_size must be >= 2"
        );
    }

    #[test]
    fn test_question_mark_propagation() {
        fn inner() -> Result<()> {
            Err(TextRankError::tokenization("boom"))
        }
        fn outer() -> Result<u32> {
            inner()?;
            Ok(1)
        }
        assert!(matches!(outer(), Err(TextRankError::Tokenization(_))));
    }
}
