//! Natural Language Processing components
//!
//! Tokenization, candidate filtering and stopword lexicons.

pub mod filter;
pub mod stopwords;
pub mod tokenizer;
