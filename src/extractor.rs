//! Keyword extraction
//!
//! [`KeywordExtractor`] wires the stages together:
//! tokenizer → candidate filter → co-occurrence graph → power iteration →
//! top-K selection. It is generic over the [`Tokenizer`] and the
//! [`CandidateFilter`], so either stage can be replaced without touching the
//! ranking core.
//!
//! The free functions at the bottom of this module use a shared default
//! extractor (built-in tokenizer, English stopwords, default config).

use crate::errors::{Result, TextRankError};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::filter::{CandidateFilter, PosStopwordFilter};
use crate::nlp::tokenizer::{Tokenizer, WordTokenizer};
use crate::pagerank::power::DampedPageRank;
use crate::pagerank::RankOutput;
use crate::selection::top_k;
use crate::types::{KeywordConfig, TaggedTerm};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for an extraction stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("keyword_stage", stage = $name).entered();
    };
}

// ============================================================================
// Ranking — graph plus scores for one document
// ============================================================================

/// The ranked graph of one document.
///
/// Scores are indexed by the graph's node ids. Keeps the convergence
/// information the plain map-returning API drops.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub graph: CsrGraph,
    pub output: RankOutput,
}

impl Ranking {
    /// Number of ranked words
    pub fn len(&self) -> usize {
        self.graph.num_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Score of a word, if it is a vertex
    pub fn score(&self, word: &str) -> Option<f64> {
        self.graph
            .get_node_by_word(word)
            .map(|id| self.output.score(id))
    }

    /// (word, score) pairs in lexical word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.graph
            .words
            .iter()
            .zip(&self.output.scores)
            .map(|(w, &s)| (w.as_str(), s))
    }

    /// Every word with its score
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.iter().map(|(w, s)| (w.to_string(), s)).collect()
    }

    /// The `count` best words with scores, highest first
    pub fn top(&self, count: usize) -> Vec<(String, f64)> {
        trace_stage!("select");
        top_k(self.iter(), count)
    }

    pub fn iterations(&self) -> usize {
        self.output.iterations
    }

    pub fn converged(&self) -> bool {
        self.output.converged
    }
}

// ============================================================================
// KeywordExtractor
// ============================================================================

/// TextRank keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor<T = WordTokenizer, F = PosStopwordFilter> {
    config: KeywordConfig,
    tokenizer: T,
    filter: F,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the default config, tokenizer and filter
    pub fn new() -> Self {
        Self {
            config: KeywordConfig::default(),
            tokenizer: WordTokenizer::new(),
            filter: PosStopwordFilter::default(),
        }
    }

    /// Create with a custom config.
    ///
    /// The stopword language, extra stopwords and token limit of the config
    /// are applied to the default filter and tokenizer.
    pub fn with_config(config: KeywordConfig) -> Result<Self> {
        config.validate()?;
        let filter = PosStopwordFilter::from_config(&config)?;
        let tokenizer = WordTokenizer::new().with_max_tokens(config.max_tokens);
        Ok(Self {
            config,
            tokenizer,
            filter,
        })
    }
}

impl<T, F> KeywordExtractor<T, F> {
    /// Replace the tokenizer
    pub fn with_tokenizer<T2: Tokenizer>(self, tokenizer: T2) -> KeywordExtractor<T2, F> {
        KeywordExtractor {
            config: self.config,
            tokenizer,
            filter: self.filter,
        }
    }

    /// Replace the candidate filter
    pub fn with_filter<F2: CandidateFilter>(self, filter: F2) -> KeywordExtractor<T, F2> {
        KeywordExtractor {
            config: self.config,
            tokenizer: self.tokenizer,
            filter,
        }
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }
}

impl<T: Tokenizer, F: CandidateFilter> KeywordExtractor<T, F> {
    /// The configured number (`top_n`) of keywords, best first
    pub fn keywords(&self, document: &str) -> Result<Vec<String>> {
        self.extract_keywords(document, self.config.top_n)
    }

    /// The `count` best keywords, best first
    pub fn extract_keywords(&self, document: &str, count: usize) -> Result<Vec<String>> {
        Ok(self
            .rank_top(document, count)?
            .into_iter()
            .map(|(word, _)| word)
            .collect())
    }

    /// Every candidate word of the document with its score
    pub fn rank_all(&self, document: &str) -> Result<HashMap<String, f64>> {
        Ok(self.rank_document_terms(document)?.to_map())
    }

    /// The `count` best keywords with their scores, best first
    pub fn rank_top(&self, document: &str, count: usize) -> Result<Vec<(String, f64)>> {
        Ok(self.rank_document_terms(document)?.top(count))
    }

    /// Like [`rank_all`](Self::rank_all) for callers holding a possibly
    /// absent document. `None` fails before any processing.
    pub fn rank_document(&self, document: Option<&str>) -> Result<HashMap<String, f64>> {
        let document =
            document.ok_or_else(|| TextRankError::invalid_argument("document is absent"))?;
        self.rank_all(document)
    }

    /// Score pre-tokenized input, bypassing the tokenizer
    pub fn score_from_terms(&self, terms: &[TaggedTerm]) -> HashMap<String, f64> {
        self.rank_terms_with_info(terms).to_map()
    }

    /// Build and rank the graph for pre-tokenized input
    pub fn rank_terms_with_info(&self, terms: &[TaggedTerm]) -> Ranking {
        let graph = {
            trace_stage!("graph");
            let builder = GraphBuilder::from_terms(terms, &self.filter, self.config.window_size);
            CsrGraph::from_builder(&builder)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            terms = terms.len(),
            vertices = graph.num_nodes,
            edges = graph.num_edges() / 2,
            "built co-occurrence graph"
        );

        let output = {
            trace_stage!("rank");
            DampedPageRank::new()
                .with_damping(self.config.damping)
                .with_max_iterations(self.config.max_iterations)
                .with_min_diff(self.config.min_diff)
                .run(&graph)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            iterations = output.iterations,
            max_diff = output.max_diff,
            converged = output.converged,
            "ranked vertices"
        );

        Ranking { graph, output }
    }

    fn rank_document_terms(&self, document: &str) -> Result<Ranking> {
        let terms = {
            trace_stage!("tokenize");
            self.tokenizer.tokenize(document)?
        };
        Ok(self.rank_terms_with_info(&terms))
    }
}

impl<T, F> KeywordExtractor<T, F>
where
    T: Tokenizer + Sync,
    F: CandidateFilter + Sync,
{
    /// Extract keywords from many documents in parallel.
    ///
    /// Results keep the input order. `max_threads` runs the batch on a
    /// dedicated pool of that size; `None` uses the global rayon pool.
    /// The first tokenizer error fails the whole batch.
    pub fn extract_keywords_batch(
        &self,
        documents: &[&str],
        count: usize,
        max_threads: Option<usize>,
    ) -> Result<Vec<Vec<String>>> {
        let pool = build_thread_pool(max_threads)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(documents = documents.len(), ?max_threads, "batch extraction");

        run_in_pool(&pool, || {
            documents
                .par_iter()
                .map(|doc| self.extract_keywords(doc, count))
                .collect()
        })
    }
}

/// Build an optional dedicated rayon thread pool.
fn build_thread_pool(max_threads: Option<usize>) -> Result<Option<Arc<rayon::ThreadPool>>> {
    match max_threads {
        None => Ok(None),
        Some(0) => Err(TextRankError::invalid_argument(
            "max_threads must be >= 1 (use None for the global pool)",
        )),
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| {
                    TextRankError::invalid_argument(format!("failed to create thread pool: {e}"))
                })?;
            Ok(Some(Arc::new(pool)))
        }
    }
}

/// Run a closure in the given pool, or on the global pool if `None`.
fn run_in_pool<R: Send>(pool: &Option<Arc<rayon::ThreadPool>>, f: impl FnOnce() -> R + Send) -> R {
    match pool {
        Some(p) => p.install(f),
        None => f(),
    }
}

// ============================================================================
// Convenience functions (shared default extractor)
// ============================================================================

fn default_extractor() -> &'static KeywordExtractor {
    static DEFAULT: OnceLock<KeywordExtractor> = OnceLock::new();
    DEFAULT.get_or_init(KeywordExtractor::new)
}

/// The `count` best keywords of a document, best first
pub fn extract_keywords(document: &str, count: usize) -> Result<Vec<String>> {
    default_extractor().extract_keywords(document, count)
}

/// Every candidate word of a document with its score
pub fn rank_all(document: &str) -> Result<HashMap<String, f64>> {
    default_extractor().rank_all(document)
}

/// The `count` best keywords of a document with scores, best first
pub fn rank_top(document: &str, count: usize) -> Result<Vec<(String, f64)>> {
    default_extractor().rank_top(document, count)
}

/// Score pre-tokenized input with the default filter and config
pub fn score_from_terms(terms: &[TaggedTerm]) -> HashMap<String, f64> {
    default_extractor().score_from_terms(terms)
}

/// Keywords for many documents in parallel, in input order
pub fn extract_keywords_batch(
    documents: &[&str],
    count: usize,
    max_threads: Option<usize>,
) -> Result<Vec<Vec<String>>> {
    default_extractor().extract_keywords_batch(documents, count, max_threads)
}
