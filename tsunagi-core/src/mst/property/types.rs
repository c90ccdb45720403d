//! Fixture types for MST property-based tests.

use test_strategy::Arbitrary;

use crate::{Edge, NodeIndexing};

/// Shape of the generated graph and its weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the optimum is unique.
    Unique,
    /// Weights come from a pool of one to three values, stressing tie-breaks.
    ManyIdentical,
    /// A random spanning tree plus a handful of extra edges, including
    /// self-loops and parallel edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated MST input with enough context to diagnose a failure.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Labelling convention the edges are expressed in.
    pub indexing: NodeIndexing,
    /// Candidate edges in input order.
    pub edges: Vec<Edge<u32>>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, indexing={}, nodes={}, edges={}",
            self.distribution,
            self.indexing,
            self.node_count,
            self.edges.len()
        )
    }
}
