//! End-to-end checks across generation, MST computation, and benchmarking.

use mstbench_core::{
    BenchmarkBuilder, BenchmarkErrorCode, GeneratorConfig, GraphGenerator, LatticeKind, MstEngine,
    MstStrategy,
};
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

#[rstest]
#[case::kruskal(MstStrategy::Kruskal)]
#[case::prim(MstStrategy::Prim)]
fn sixteen_vertex_graph_yields_fifteen_tree_edges(#[case] strategy: MstStrategy) {
    let mut rng = SmallRng::seed_from_u64(2024);
    let graph = GraphGenerator::default()
        .generate(16, &mut rng)
        .expect("generation must succeed");
    assert_eq!(graph.vertex_count(), 16);
    assert!(graph.is_connected());

    let result = MstEngine::new(strategy)
        .compute(&graph, &mut rng)
        .expect("mst must succeed");
    assert_eq!(result.edges().len(), 15);
    assert!(result.contains_edge(result.critical_link().edge()));
}

#[test]
fn both_strategies_find_the_same_weight_on_one_weighting() {
    let mut rng = SmallRng::seed_from_u64(77);
    let graph = GraphGenerator::new(GeneratorConfig {
        lattice: LatticeKind::Orthogonal,
        ..GeneratorConfig::default()
    })
    .expect("config is valid")
    .generate(40, &mut rng)
    .expect("generation must succeed");

    let kruskal = MstEngine::new(MstStrategy::Kruskal)
        .compute(&graph, &mut rng)
        .expect("kruskal must succeed");
    let critical = kruskal.critical_link().edge();
    let prim = MstEngine::new(MstStrategy::Prim)
        .solve(kruskal.graph().clone(), critical)
        .expect("prim must succeed");

    assert_eq!(kruskal.total_weight(), prim.total_weight());
}

#[test]
fn benchmark_reports_two_sizes_of_five_trials() {
    let report = BenchmarkBuilder::new()
        .with_vertex_step(8)
        .with_max_vertices(16)
        .with_trials_per_step(5)
        .build()
        .expect("configuration is valid")
        .run()
        .expect("benchmark must succeed");

    let pairs: Vec<(usize, f64)> = report.pairs().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, 8);
    assert_eq!(pairs[1].0, 16);
    for step in report.steps() {
        assert_eq!(step.trials().len(), 5);
    }
}

#[test]
fn zero_step_is_a_configuration_error() {
    let err = BenchmarkBuilder::new()
        .with_vertex_step(0)
        .build()
        .expect_err("zero step must be rejected");
    assert_eq!(err.code(), BenchmarkErrorCode::ZeroVertexStep);
    assert_eq!(err.code().as_str(), "BENCHMARK_ZERO_VERTEX_STEP");
    assert_eq!(err.trial_code(), None);
}
