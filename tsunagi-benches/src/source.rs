//! Seeded synthetic graphs for benchmarking.
//!
//! Each graph starts with a random spanning path, so it is connected, and is
//! then padded with uniformly random edges (self-loops and parallel edges
//! included) until the requested edge count is reached.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tsunagi_core::Edge;

/// Largest weight assigned to a generated edge.
const MAX_WEIGHT: u64 = 1_000_000;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of one-based node labels.
    pub node_count: usize,
    /// Total number of edges to generate.
    pub edge_count: usize,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// The graph needs at least one node.
    #[error("node_count must be positive")]
    ZeroNodes,
    /// Too few edges to connect every node.
    #[error("edge_count {edge_count} cannot connect {node_count} nodes")]
    TooFewEdges {
        /// Requested edge count.
        edge_count: usize,
        /// Requested node count.
        node_count: usize,
    },
}

/// A connected weighted graph with one-based labels.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge<u64>>,
}

impl SyntheticGraph {
    /// Generates a graph for `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when `node_count` is zero or `edge_count`
    /// is below `node_count - 1`.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        let SyntheticGraphConfig {
            node_count,
            edge_count,
            seed,
        } = *config;
        if node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if edge_count < node_count - 1 {
            return Err(SyntheticError::TooFewEdges {
                edge_count,
                node_count,
            });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (1..=node_count).collect();
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        let mut edges = Vec::with_capacity(edge_count);
        for pair in order.windows(2) {
            if let [left, right] = *pair {
                edges.push(Edge::new(left, right, rng.gen_range(1..=MAX_WEIGHT)));
            }
        }
        while edges.len() < edge_count {
            let left = rng.gen_range(1..=node_count);
            let right = rng.gen_range(1..=node_count);
            edges.push(Edge::new(left, right, rng.gen_range(1..=MAX_WEIGHT)));
        }
        Ok(Self { node_count, edges })
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the generated edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<u64>] { &self.edges }
}
