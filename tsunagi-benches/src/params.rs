//! Benchmark parameter types.

use std::fmt;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct KruskalBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of candidate edges.
    pub edge_count: usize,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.node_count, self.edge_count)
    }
}
