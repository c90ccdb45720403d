//! Union-find (disjoint set union) over labelled graph nodes.
//!
//! Kruskal's algorithm asks, for every candidate edge, whether its endpoints
//! already share a component. This module answers that question with path
//! compression and union by rank, giving near-constant amortised cost per
//! operation.

use std::{cmp::Ordering, fmt};

use crate::error::DisjointSetError;

/// Labelling convention for graph nodes.
///
/// The convention is fixed when a [`DisjointSet`] is created and every label
/// passed afterwards is checked against it. Labels from the other convention
/// are rejected rather than silently shifted.
///
/// # Examples
/// ```
/// use tsunagi_core::NodeIndexing;
///
/// assert_eq!(NodeIndexing::OneBased.base(), 1);
/// assert_eq!(NodeIndexing::ZeroBased.base(), 0);
/// assert_eq!(NodeIndexing::default(), NodeIndexing::OneBased);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeIndexing {
    /// Nodes are labelled `1..=n`.
    #[default]
    OneBased,
    /// Nodes are labelled `0..n`.
    ZeroBased,
}

impl NodeIndexing {
    /// Returns the smallest valid label under this convention.
    #[must_use]
    pub const fn base(self) -> usize {
        match self {
            Self::OneBased => 1,
            Self::ZeroBased => 0,
        }
    }
}

impl fmt::Display for NodeIndexing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneBased => "one-based",
            Self::ZeroBased => "zero-based",
        })
    }
}

/// Partition of `n` labelled nodes into disjoint components.
///
/// Internally nodes live in slots `0..n`; labels are translated through the
/// configured [`NodeIndexing`] on entry and exit, so callers only ever see
/// labels.
///
/// # Examples
/// ```
/// use tsunagi_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(1, 2)?);
/// assert!(set.union(3, 4)?);
/// assert!(!set.union(2, 1)?);
/// assert_eq!(set.find(2)?, set.find(1)?);
/// assert_ne!(set.find(1)?, set.find(3)?);
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), tsunagi_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
    indexing: NodeIndexing,
}

impl DisjointSet {
    /// Creates a set of `node_count` singleton components labelled `1..=node_count`.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self::with_indexing(node_count, NodeIndexing::OneBased)
    }

    /// Creates a set of `node_count` singleton components using `indexing`.
    ///
    /// # Examples
    /// ```
    /// use tsunagi_core::{DisjointSet, NodeIndexing};
    ///
    /// let mut set = DisjointSet::with_indexing(3, NodeIndexing::ZeroBased);
    /// assert_eq!(set.find(0)?, 0);
    /// assert!(set.find(3).is_err());
    /// # Ok::<(), tsunagi_core::DisjointSetError>(())
    /// ```
    #[must_use]
    pub fn with_indexing(node_count: usize, indexing: NodeIndexing) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
            indexing,
        }
    }

    /// Returns the number of nodes tracked by the set.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the set tracks no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the labelling convention enforced by the set.
    #[must_use]
    #[rustfmt::skip]
    pub fn indexing(&self) -> NodeIndexing { self.indexing }

    /// Returns the number of disjoint components currently in the set.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative label of the component containing `node`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root, so repeated queries on the same path are O(1).
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRangeNode`] when `node` is not a valid
    /// label for this set.
    pub fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        let slot = self.slot(node)?;
        let root = self.find_slot(slot);
        Ok(self.label(root))
    }

    /// Merges the components containing `u` and `v`.
    ///
    /// Returns `false` without modifying the set when both nodes already share
    /// a component, which signals that an edge `(u, v)` would close a cycle.
    /// The root with the strictly smaller rank is attached beneath the other;
    /// on a tie the root of `u` becomes the parent and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRangeNode`] when either label is
    /// invalid. Neither component is modified in that case.
    pub fn union(&mut self, u: usize, v: usize) -> Result<bool, DisjointSetError> {
        let left = self.slot(u)?;
        let right = self.slot(v)?;
        let left_root = self.find_slot(left);
        let right_root = self.find_slot(right);
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        match left_rank.cmp(&right_rank) {
            Ordering::Less => self.parent[left_root] = right_root,
            Ordering::Greater => self.parent[right_root] = left_root,
            Ordering::Equal => {
                self.parent[right_root] = left_root;
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `u` and `v` belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRangeNode`] when either label is
    /// invalid.
    pub fn connected(&mut self, u: usize, v: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(u)? == self.find(v)?)
    }

    /// Returns `true` when `node` is a valid label for this set.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        self.slot(node).is_ok()
    }

    pub(crate) fn check_label(&self, node: usize) -> Result<(), DisjointSetError> {
        self.slot(node).map(|_| ())
    }

    fn slot(&self, node: usize) -> Result<usize, DisjointSetError> {
        node.checked_sub(self.indexing.base())
            .filter(|slot| *slot < self.parent.len())
            .ok_or(DisjointSetError::OutOfRangeNode {
                node,
                node_count: self.parent.len(),
                indexing: self.indexing,
            })
    }

    fn label(&self, slot: usize) -> usize {
        slot + self.indexing.base()
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let parent = self.parent[slot];
            self.parent[slot] = root;
            slot = parent;
        }

        root
    }
}
