//! Co-occurrence graph builder
//!
//! Words are interned to `u32` ids through an FxHashMap, and each node keeps
//! an FxHashSet of neighbor ids. The graph is undirected and unweighted:
//! repeated co-occurrences collapse into a single edge.

use crate::nlp::filter::CandidateFilter;
use crate::types::TaggedTerm;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The word for this node
    pub word: String,
    /// Neighbor node ids
    pub neighbors: FxHashSet<u32>,
}

impl BuilderNode {
    /// Create a new node with no neighbors
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            neighbors: FxHashSet::default(),
        }
    }

    /// Number of distinct neighbors
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// A mutable graph builder for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps word -> node ID
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, indexed by ID in first-seen order
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            word_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given word, returning its ID
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(BuilderNode::new(word));
        id
    }

    /// Record an undirected edge between two nodes.
    ///
    /// Self-loops are ignored and repeated edges are absorbed.
    pub fn add_edge(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }

        if let Some(node) = self.nodes.get_mut(a as usize) {
            node.neighbors.insert(b);
        }
        if let Some(node) = self.nodes.get_mut(b as usize) {
            node.neighbors.insert(a);
        }
    }

    /// Build a graph from an already filtered word stream.
    ///
    /// Each word is linked to every distinct word among the previous
    /// `window_size - 1` words of the stream.
    pub fn from_words<I, S>(words: I, window_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        let mut window: VecDeque<u32> = VecDeque::with_capacity(window_size);

        for word in words {
            let id = builder.get_or_create_node(word.as_ref());

            if window.len() >= window_size {
                window.pop_front();
            }

            for &prev in &window {
                if prev != id {
                    builder.add_edge(id, prev);
                }
            }

            window.push_back(id);
        }

        builder
    }

    /// Build a graph from tagged terms, keeping only those the filter accepts.
    ///
    /// Rejected terms are dropped before windowing, so they never separate
    /// two included words.
    pub fn from_terms<F>(terms: &[TaggedTerm], filter: &F, window_size: usize) -> Self
    where
        F: CandidateFilter + ?Sized,
    {
        let included = terms
            .iter()
            .filter(|t| filter.should_include(t))
            .map(|t| t.word.as_str());

        Self::from_words(included, window_size)
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(BuilderNode::degree).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by word
    pub fn get_node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Get the word for a node ID
    pub fn get_word(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.word.as_str())
    }

    /// Neighbor words of `word`, sorted; empty if the word is not a vertex
    pub fn neighbors_of(&self, word: &str) -> Vec<&str> {
        let Some(node) = self.get_node_id(word).and_then(|id| self.get_node(id)) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = node
            .neighbors
            .iter()
            .filter_map(|&n| self.get_word(n))
            .collect();
        out.sort_unstable();
        out
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
