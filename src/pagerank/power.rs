//! Damped power iteration
//!
//! TextRank's vertex score over an undirected, unweighted graph:
//!
//! ```text
//! WS(V) = (1 - d) + d * Σ_{U ∈ adj(V)} WS(U) / |adj(U)|
//! ```
//!
//! Scores start at `sigmoid(degree)` and are not normalized, so an isolated
//! vertex settles at `1 - d` and a fully symmetric graph settles at `1.0`.
//! Every round reads only the previous round's scores.

use super::{sigmoid, RankOutput};
use crate::graph::csr::CsrGraph;
use crate::types::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_DIFF};

/// Damped PageRank with sigmoid initialization and a max-change stop rule
#[derive(Debug, Clone)]
pub struct DampedPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of rounds
    pub max_iterations: usize,
    /// Stop once the largest per-node change is at most this
    pub min_diff: f64,
}

impl Default for DampedPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_diff: DEFAULT_MIN_DIFF,
        }
    }
}

impl DampedPageRank {
    /// Create a new DampedPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_min_diff(mut self, min_diff: f64) -> Self {
        self.min_diff = min_diff;
        self
    }

    /// Starting scores: `sigmoid(degree)` per node
    pub fn initial_scores(graph: &CsrGraph) -> Vec<f64> {
        (0..graph.num_nodes as u32)
            .map(|node| sigmoid(graph.degree(node) as f64))
            .collect()
    }

    /// Compute one round from `scores` into `next`, returning the largest
    /// absolute change of any node.
    pub fn step(&self, graph: &CsrGraph, scores: &[f64], next: &mut [f64]) -> f64 {
        let base = 1.0 - self.damping;
        let mut max_diff = 0.0f64;

        for (node, slot) in next.iter_mut().enumerate().take(graph.num_nodes) {
            let node = node as u32;
            let mut score = base;

            for &neighbor in graph.neighbors(node) {
                let degree = graph.degree(neighbor);
                if neighbor == node || degree == 0 {
                    continue;
                }
                let prev = scores.get(neighbor as usize).copied().unwrap_or(0.0);
                score += self.damping / degree as f64 * prev;
            }

            let old = scores.get(node as usize).copied().unwrap_or(0.0);
            max_diff = max_diff.max((score - old).abs());
            *slot = score;
        }

        max_diff
    }

    /// Rank every node of the graph.
    ///
    /// Returns the last round's scores whether or not the threshold was
    /// reached; `converged` tells the two apart.
    pub fn run(&self, graph: &CsrGraph) -> RankOutput {
        let n = graph.num_nodes;
        if n == 0 {
            return RankOutput::new(vec![], 0, 0.0, true);
        }

        let mut scores = Self::initial_scores(graph);
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut max_diff = 0.0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            max_diff = self.step(graph, &scores, &mut next);

            // Swap buffers
            std::mem::swap(&mut scores, &mut next);

            if max_diff <= self.min_diff {
                converged = true;
                break;
            }
        }

        RankOutput::new(scores, iterations, max_diff, converged)
    }
}
