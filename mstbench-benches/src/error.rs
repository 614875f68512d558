//! Benchmark setup error type.
//!
//! Lets fixture builders propagate core failures with `?` so bench entry
//! points can report one setup message instead of scattering `.expect()`.

use mstbench_core::{BenchmarkError, GenerateError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation failed.
    #[error("graph generation failed: {0}")]
    Generate(#[from] GenerateError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Benchmark configuration or execution failed.
    #[error("benchmark harness failed: {0}")]
    Benchmark(#[from] BenchmarkError),
    /// The fixture graph had no edge to serve as the critical link.
    #[error("fixture graph with {vertices} vertices has no edges")]
    NoEdges {
        /// Vertex count of the edgeless fixture.
        vertices: usize,
    },
}
