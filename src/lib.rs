//! # textrank_keyword
//!
//! Single-document keyword extraction with TextRank.
//!
//! Words that pass a candidate filter become vertices of an undirected
//! co-occurrence graph (sliding window over the filtered stream), vertices
//! are scored by damped power iteration, and the best K are picked with a
//! bounded heap.
//!
//! ```rust,ignore
//! let keywords = textrank_keyword::extract_keywords(text, 5)?;
//! ```
//!
//! ## Features
//!
//! - **Pluggable**: bring your own [`Tokenizer`] or [`CandidateFilter`]
//! - **Deterministic**: lexical vertex order and a lexical tie-break
//! - **Batch**: many documents in parallel via rayon
//! - **tracing** (default): stage spans and convergence events

pub mod errors;
pub mod extractor;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod selection;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{KeywordConfig, PosTag, TaggedTerm};

// Re-export main functionality
pub use extractor::{
    extract_keywords, extract_keywords_batch, rank_all, rank_top, score_from_terms,
    KeywordExtractor, Ranking,
};
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{
    filter::{CandidateFilter, PosStopwordFilter},
    stopwords::StopwordSet,
    tokenizer::{Tokenizer, WordTokenizer},
};
pub use pagerank::{power::DampedPageRank, RankOutput};
pub use selection::{max_heap::BoundedMaxHeap, top_k};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
