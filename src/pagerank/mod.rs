//! Vertex ranking
//!
//! Damped power iteration over the co-occurrence graph.

pub mod power;

/// Result of a ranking run
#[derive(Debug, Clone)]
pub struct RankOutput {
    /// Scores for each node (indexed by CSR node ID)
    pub scores: Vec<f64>,
    /// Number of rounds performed
    pub iterations: usize,
    /// Largest per-node change in the last round
    pub max_diff: f64,
    /// Whether `max_diff` dropped to the threshold before the round cap
    pub converged: bool,
}

impl RankOutput {
    /// Create a new rank output
    pub fn new(scores: Vec<f64>, iterations: usize, max_diff: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            max_diff,
            converged,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// Logistic function, mapping any degree into (0, 1)
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
