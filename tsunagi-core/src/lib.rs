//! Tsunagi core library.
//!
//! Computes minimum spanning trees (and forests) over weighted undirected
//! graphs with Kruskal's algorithm, backed by a union-find structure that uses
//! iterative path compression and union by rank.
//!
//! # Examples
//! ```
//! use tsunagi_core::{Edge, compute_mst};
//!
//! let edges = [
//!     Edge::new(1, 2, 1),
//!     Edge::new(2, 3, 2),
//!     Edge::new(2, 4, 4),
//!     Edge::new(1, 4, 5),
//!     Edge::new(1, 3, 3),
//! ];
//! let mst = compute_mst(4, &edges)?;
//! assert_eq!(mst.total_weight(), 7);
//! assert_eq!(mst.edges().len(), 3);
//! assert!(mst.is_tree());
//! # Ok::<(), tsunagi_core::MstError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod mst;
pub mod ranking;
#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::{DisjointSet, NodeIndexing},
    edge::{Edge, EdgeWeight},
    error::{DisjointSetError, DisjointSetErrorCode, MstError, MstErrorCode, Result},
    mst::{MstBuilder, MstResult, compute_mst},
};
