//! Graph construction and representation
//!
//! The builder collects the co-occurrence graph from a word stream; the
//! CSR form is the frozen, lexically ordered graph used for ranking.

pub mod builder;
pub mod csr;
