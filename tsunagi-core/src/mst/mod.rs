//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Candidate edges are drained from a min-priority queue keyed on
//! `(weight, input position)`. An edge is accepted when its endpoints still
//! live in different union-find components and discarded otherwise, so the
//! accepted edges never close a cycle. A disconnected graph yields a minimum
//! spanning forest.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::{debug, instrument, trace};

use crate::{
    Result,
    disjoint_set::{DisjointSet, NodeIndexing},
    edge::{Edge, EdgeWeight},
    error::MstError,
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are listed in acceptance order: the order in which they left the
/// weight-ascending queue and passed the cycle check.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MstResult<W> {
    total_weight: W,
    edges: Vec<Edge<W>>,
    node_count: usize,
    component_count: usize,
}

impl<W: Copy> MstResult<W> {
    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W { self.total_weight }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the number of nodes the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of trees in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the result, returning `(total_weight, edges)`.
    #[must_use]
    pub fn into_parts(self) -> (W, Vec<Edge<W>>) {
        (self.total_weight, self.edges)
    }
}

/// Configures and runs Kruskal's algorithm.
///
/// # Examples
/// ```
/// use tsunagi_core::{Edge, MstBuilder, NodeIndexing};
///
/// let edges = [Edge::new(0, 1, 2.5), Edge::new(1, 2, 0.5), Edge::new(0, 2, 1.0)];
/// let mst = MstBuilder::new()
///     .with_indexing(NodeIndexing::ZeroBased)
///     .build(3, &edges)?;
/// assert_eq!(mst.total_weight(), 1.5);
/// assert_eq!(mst.edges(), &[Edge::new(1, 2, 0.5), Edge::new(0, 2, 1.0)]);
/// # Ok::<(), tsunagi_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstBuilder {
    indexing: NodeIndexing,
}

impl MstBuilder {
    /// Creates a builder using one-based node labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the node labelling convention.
    #[must_use]
    pub fn with_indexing(mut self, indexing: NodeIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Returns the configured node labelling convention.
    #[must_use]
    #[rustfmt::skip]
    pub fn indexing(&self) -> NodeIndexing { self.indexing }

    /// Computes a minimum spanning forest over `node_count` nodes.
    ///
    /// Edges of equal weight are considered in input order. Self-loops and
    /// duplicate edges need no special treatment: the cycle check rejects
    /// them.
    ///
    /// # Errors
    /// Returns [`MstError::OutOfRangeNode`] when an edge references a label
    /// outside the configured range and [`MstError::NonFiniteWeight`] when a
    /// weight is NaN or infinite. Every edge is checked before any is
    /// accepted. [`MstError::WeightOverflow`] is returned when the running
    /// total no longer fits the weight type; no partial forest is returned in
    /// any failure case.
    #[instrument(
        name = "mst.build",
        err,
        skip(self, edges),
        fields(edge_count = edges.len(), indexing = %self.indexing),
    )]
    pub fn build<W: EdgeWeight>(
        &self,
        node_count: usize,
        edges: &[Edge<W>],
    ) -> Result<MstResult<W>> {
        let mut forest = DisjointSet::with_indexing(node_count, self.indexing);
        let mut queue = queue_edges(&forest, edges)?;

        let mut accepted = Vec::with_capacity(node_count.saturating_sub(1).min(edges.len()));
        let mut total_weight = W::zero();
        let mut rejected = 0_usize;

        while forest.component_count() > 1 {
            let Some(Reverse(queued)) = queue.pop() else {
                break;
            };
            let edge = queued.edge;
            let merged = forest
                .union(edge.u(), edge.v())
                .map_err(|source| MstError::OutOfRangeNode {
                    edge_index: queued.sequence,
                    source,
                })?;
            if merged {
                total_weight = total_weight.checked_total(edge.weight()).ok_or(
                    MstError::WeightOverflow {
                        edge_index: queued.sequence,
                    },
                )?;
                accepted.push(edge);
            } else {
                rejected += 1;
                trace!(
                    edge_index = queued.sequence,
                    u = edge.u(),
                    v = edge.v(),
                    "edge closes a cycle"
                );
            }
        }

        debug!(
            accepted = accepted.len(),
            rejected,
            skipped = queue.len(),
            components = forest.component_count(),
            "minimum spanning forest complete"
        );

        Ok(MstResult {
            total_weight,
            edges: accepted,
            node_count,
            component_count: forest.component_count(),
        })
    }
}

/// Computes a minimum spanning forest over nodes labelled `1..=node_count`.
///
/// Shorthand for [`MstBuilder::new`] followed by [`MstBuilder::build`].
///
/// # Errors
/// See [`MstBuilder::build`].
///
/// # Examples
/// ```
/// use tsunagi_core::{Edge, compute_mst};
///
/// let mst = compute_mst(3, &[Edge::new(1, 2, 5)])?;
/// assert_eq!(mst.total_weight(), 5);
/// assert_eq!(mst.component_count(), 2);
/// assert!(!mst.is_tree());
/// # Ok::<(), tsunagi_core::MstError>(())
/// ```
pub fn compute_mst<W: EdgeWeight>(
    node_count: usize,
    edges: &[Edge<W>],
) -> Result<MstResult<W>> {
    MstBuilder::new().build(node_count, edges)
}

/// Queue entry ordered by weight, then by input position.
#[derive(Clone, Copy, Debug)]
struct QueuedEdge<W> {
    edge: Edge<W>,
    sequence: usize,
}

impl<W: EdgeWeight> Ord for QueuedEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .weight()
            .weight_cmp(&other.edge.weight())
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<W: EdgeWeight> PartialOrd for QueuedEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: EdgeWeight> PartialEq for QueuedEdge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: EdgeWeight> Eq for QueuedEdge<W> {}

fn validate_edge<W: EdgeWeight>(
    forest: &DisjointSet,
    edge_index: usize,
    edge: &Edge<W>,
) -> Result<()> {
    for node in [edge.u(), edge.v()] {
        forest
            .check_label(node)
            .map_err(|source| MstError::OutOfRangeNode { edge_index, source })?;
    }
    if !edge.weight().is_admissible() {
        return Err(MstError::NonFiniteWeight {
            edge_index,
            u: edge.u(),
            v: edge.v(),
        });
    }
    Ok(())
}

fn queue_edges<W: EdgeWeight>(
    forest: &DisjointSet,
    edges: &[Edge<W>],
) -> Result<BinaryHeap<Reverse<QueuedEdge<W>>>> {
    let entries = edges
        .iter()
        .enumerate()
        .map(|(sequence, edge)| {
            validate_edge(forest, sequence, edge)?;
            Ok(Reverse(QueuedEdge {
                edge: *edge,
                sequence,
            }))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(BinaryHeap::from(entries))
}

#[cfg(test)]
mod property;
