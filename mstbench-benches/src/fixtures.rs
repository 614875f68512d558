//! Seeded graph fixtures for the MST benchmarks.
//!
//! Fixtures are built once per size outside the measured closure so only the
//! strategy itself is timed.

use mstbench_core::{EdgeId, Graph, GraphGenerator, assign_random_weights};
use rand::{SeedableRng, rngs::SmallRng, seq::IteratorRandom};

use crate::error::BenchSetupError;

/// A weighted connected graph paired with the edge forced into every tree.
#[derive(Clone, Debug)]
pub struct WeightedFixture {
    graph: Graph,
    critical: EdgeId,
}

impl WeightedFixture {
    /// Generates a connected graph with `vertex_count` vertices, weights it,
    /// and draws a critical link, all from `seed`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generate`] when generation fails and
    /// [`BenchSetupError::NoEdges`] when the graph has a single vertex.
    pub fn build(vertex_count: usize, seed: u64) -> Result<Self, BenchSetupError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let topology = GraphGenerator::default().generate(vertex_count, &mut rng)?;
        let graph = assign_random_weights(&topology, &mut rng);
        let critical = graph
            .edge_ids()
            .choose(&mut rng)
            .ok_or(BenchSetupError::NoEdges {
                vertices: vertex_count,
            })?;
        Ok(Self { graph, critical })
    }

    /// The weighted graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The edge forced into the tree.
    #[must_use]
    pub const fn critical(&self) -> EdgeId {
        self.critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mstbench_core::{MstEngine, MstStrategy};
    use rstest::rstest;

    #[rstest]
    #[case(16)]
    #[case(100)]
    fn fixtures_are_solvable_by_both_strategies(#[case] vertex_count: usize) {
        let fixture = WeightedFixture::build(vertex_count, 42).expect("fixture must build");
        assert_eq!(fixture.graph().vertex_count(), vertex_count);

        let totals: Vec<u64> = [MstStrategy::Kruskal, MstStrategy::Prim]
            .into_iter()
            .map(|strategy| {
                MstEngine::new(strategy)
                    .solve(fixture.graph().clone(), fixture.critical())
                    .expect("fixture must solve")
                    .total_weight()
            })
            .collect();
        assert_eq!(totals.first(), totals.last());
    }

    #[test]
    fn single_vertex_fixture_is_rejected() {
        let err = WeightedFixture::build(1, 42).expect_err("no edge to choose");
        assert!(matches!(err, BenchSetupError::NoEdges { vertices: 1 }));
    }
}
