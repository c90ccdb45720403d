//! Benchmark support crate for tsunagi.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks of the Kruskal implementation.

pub mod error;
pub mod params;
pub mod source;
