//! Property-based tests for the Kruskal MST implementation.
//!
//! Checks the builder against an independent Prim oracle, validates the
//! structural invariants of every forest (acyclicity, edge count, weight
//! sum, acceptance order) and confirms that repeated runs agree exactly.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod types;
