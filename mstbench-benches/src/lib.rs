//! Benchmark support crate for mstbench.
//!
//! Provides seeded graph fixtures and parameter types shared by the Criterion
//! benchmarks for graph generation, the two MST strategies, and the full
//! multi-trial harness.

pub mod error;
pub mod fixtures;
pub mod params;
