//! Top-K keyword selection
//!
//! Picks the K best-scored words without sorting the whole score map.
//! Equal scores are ordered by word, lexically ascending, so the output
//! never depends on hash-map iteration order.

pub mod max_heap;

use max_heap::BoundedMaxHeap;
use std::cmp::Ordering;

/// A word with its score, ordered for selection
#[derive(Debug, Clone, Copy)]
pub struct ScoredWord<'a> {
    pub word: &'a str,
    pub score: f64,
}

impl<'a> ScoredWord<'a> {
    pub fn new(word: &'a str, score: f64) -> Self {
        Self { word, score }
    }
}

impl Ord for ScoredWord<'_> {
    /// Higher score is greater; on equal scores the lexically smaller word
    /// is greater, so it comes first in descending output.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.word.cmp(self.word))
    }
}

impl PartialOrd for ScoredWord<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoredWord<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredWord<'_> {}

/// The `k` highest-scored entries, best first.
///
/// `k` larger than the number of entries returns all of them sorted.
pub fn top_k<'a, I>(entries: I, k: usize) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut heap = BoundedMaxHeap::new(k);
    heap.add_all(
        entries
            .into_iter()
            .map(|(word, score)| ScoredWord::new(word, score)),
    );

    heap.into_sorted_vec()
        .into_iter()
        .map(|sw| (sw.word.to_string(), sw.score))
        .collect()
}
