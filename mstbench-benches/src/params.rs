//! Benchmark parameter types.
//!
//! Each struct renders as the Criterion parameter label so group reports read
//! `n=256` or `n=256,crossed`.

use std::fmt;

use mstbench_core::{LatticeKind, MstStrategy};

/// Parameters for one MST strategy measurement.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Vertex count of the fixture graph.
    pub vertex_count: usize,
    /// Strategy under measurement.
    pub strategy: MstStrategy,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

/// Parameters for one generation measurement.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Target vertex count.
    pub vertex_count: usize,
    /// Lattice grown before trimming.
    pub lattice: LatticeKind,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.lattice.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LatticeKind::Crossed, "n=64,crossed")]
    #[case(LatticeKind::Orthogonal, "n=64,orthogonal")]
    fn generation_params_render_lattice(#[case] lattice: LatticeKind, #[case] expected: &str) {
        let params = GenerationBenchParams {
            vertex_count: 64,
            lattice,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[test]
    fn mst_params_render_size_only() {
        let params = MstBenchParams {
            vertex_count: 128,
            strategy: MstStrategy::Prim,
        };
        assert_eq!(params.to_string(), "n=128");
    }
}
