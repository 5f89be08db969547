//! Compressed Sparse Row (CSR) graph representation
//!
//! The frozen graph the rank engine iterates. Vertices are renumbered so
//! that vertex `i` is the `i`-th word in lexical order, and each neighbor
//! list is sorted. Iteration over the graph is therefore deterministic
//! regardless of hash seed or token order.

use super::builder::GraphBuilder;

/// An unweighted undirected graph in CSR format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's neighbors are at col_idx[row_ptr[i]..row_ptr[i+1]]
    pub row_ptr: Vec<usize>,
    /// Neighbor node ids, each row sorted ascending
    pub col_idx: Vec<u32>,
    /// Words for each node, sorted ascending
    pub words: Vec<String>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format with lexical node order
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();

        // order[new] = old
        let mut order: Vec<u32> = (0..num_nodes as u32).collect();
        order.sort_unstable_by(|&a, &b| builder.get_word(a).cmp(&builder.get_word(b)));

        // remap[old] = new
        let mut remap = vec![0u32; num_nodes];
        for (new_id, &old_id) in order.iter().enumerate() {
            remap[old_id as usize] = new_id as u32;
        }

        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut words = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for &old_id in &order {
            let Some(node) = builder.get_node(old_id) else {
                continue;
            };
            words.push(node.word.clone());

            let mut neighbors: Vec<u32> = node
                .neighbors
                .iter()
                .map(|&n| remap[n as usize])
                .collect();
            neighbors.sort_unstable();
            col_idx.extend(neighbors);

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            words,
        }
    }

    /// Neighbor ids of a node
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        &self.col_idx[start..end]
    }

    /// Number of distinct neighbors of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the word for a node
    pub fn word(&self, node: u32) -> &str {
        &self.words[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find a node by word (binary search over the sorted word list)
    pub fn get_node_by_word(&self, word: &str) -> Option<u32> {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .ok()
            .map(|i| i as u32)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            words: Vec::new(),
        }
    }
}
