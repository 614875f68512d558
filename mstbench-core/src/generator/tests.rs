use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use super::*;
use crate::{
    error::GenerateErrorCode,
    test_utils::{bfs_component_count, suite_proptest_config},
};

fn generator(lattice: LatticeKind) -> GraphGenerator {
    GraphGenerator::new(GeneratorConfig {
        lattice,
        ..GeneratorConfig::default()
    })
    .expect("default factor is valid")
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(0.5)]
#[case(-1.0)]
fn rejects_invalid_oversize_factor(#[case] factor: f64) {
    let err = GraphGenerator::new(GeneratorConfig {
        oversize_factor: factor,
        ..GeneratorConfig::default()
    })
    .expect_err("factor must be rejected");
    assert_eq!(err.code(), GenerateErrorCode::InvalidOversizeFactor);
}

#[rstest]
#[case(1, 2)]
#[case(4, 3)]
#[case(20, 5)]
#[case(100, 11)]
fn lattice_side_oversizes_target(#[case] target: usize, #[case] expected: usize) {
    let side = GraphGenerator::default()
        .lattice_side(target)
        .expect("side must fit");
    assert_eq!(side, expected);
    assert!(side * side >= target);
}

#[test]
fn exact_factor_still_covers_target() {
    let generator = GraphGenerator::new(GeneratorConfig {
        oversize_factor: 1.0,
        ..GeneratorConfig::default()
    })
    .expect("factor 1.0 is valid");
    for target in 1..200 {
        let side = generator.lattice_side(target).expect("side must fit");
        assert!(side * side >= target, "side {side} too small for {target}");
    }
}

#[test]
fn zero_target_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = GraphGenerator::default()
        .generate(0, &mut rng)
        .expect_err("zero target must fail");
    assert_eq!(err, GenerateError::ZeroTarget);
}

#[rstest]
#[case::crossed(LatticeKind::Crossed, 3, 9, 20)]
#[case::orthogonal(LatticeKind::Orthogonal, 3, 9, 12)]
#[case::crossed_single(LatticeKind::Crossed, 1, 1, 0)]
fn lattice_shape(
    #[case] kind: LatticeKind,
    #[case] side: usize,
    #[case] vertices: usize,
    #[case] edges: usize,
) {
    let graph = build_lattice(side, vertices, kind).expect("lattice must build");
    assert_eq!(graph.vertex_count(), vertices);
    assert_eq!(graph.edge_count(), edges);
    assert!(graph.is_connected());
}

#[test]
fn crossed_lattice_links_diagonals() {
    let graph = build_lattice(2, 4, LatticeKind::Crossed).expect("lattice must build");
    assert!(graph.find_edge(VertexId::new(0), VertexId::new(3)).is_some());
    assert!(graph.find_edge(VertexId::new(1), VertexId::new(2)).is_some());
    assert!(graph.articulation_points().is_empty());
}

#[test]
fn lattice_overflow_reports_the_requested_target() {
    let err = build_lattice(usize::MAX, 7, LatticeKind::Orthogonal)
        .expect_err("side must overflow");
    assert_eq!(err, GenerateError::LatticeOverflow { target: 7 });
}

#[rstest]
#[case(LatticeKind::Crossed, 1)]
#[case(LatticeKind::Crossed, 2)]
#[case(LatticeKind::Crossed, 8)]
#[case(LatticeKind::Crossed, 37)]
#[case(LatticeKind::Crossed, 64)]
#[case(LatticeKind::Orthogonal, 5)]
#[case(LatticeKind::Orthogonal, 48)]
fn generates_connected_graph_of_exact_size(#[case] kind: LatticeKind, #[case] target: usize) {
    let mut rng = SmallRng::seed_from_u64(target as u64);
    let graph = generator(kind)
        .generate(target, &mut rng)
        .expect("generation must succeed");
    assert_eq!(graph.vertex_count(), target);
    assert_eq!(bfs_component_count(&graph), 1);
}

#[test]
fn same_seed_yields_same_topology() {
    let generate = || {
        let mut rng = SmallRng::seed_from_u64(99);
        GraphGenerator::default()
            .generate(30, &mut rng)
            .expect("generation must succeed")
    };
    let first = generate();
    let second = generate();
    assert_eq!(
        first.vertices().collect::<Vec<_>>(),
        second.vertices().collect::<Vec<_>>()
    );
    assert_eq!(
        first.edges().map(|(id, edge)| (id, *edge)).collect::<Vec<_>>(),
        second.edges().map(|(id, edge)| (id, *edge)).collect::<Vec<_>>()
    );
}

#[test]
fn generated_graph_has_no_weights() {
    let mut rng = SmallRng::seed_from_u64(5);
    let graph = GraphGenerator::default()
        .generate(16, &mut rng)
        .expect("generation must succeed");
    assert!(graph.edges().all(|(_, edge)| edge.weight().is_none()));
}

proptest! {
    #![proptest_config(suite_proptest_config(32))]

    #[test]
    fn any_target_and_seed_yields_connected_graph(
        target in 1_usize..120,
        seed in any::<u64>(),
        orthogonal in any::<bool>(),
        factor in 1.0_f64..2.5,
    ) {
        let lattice = if orthogonal { LatticeKind::Orthogonal } else { LatticeKind::Crossed };
        let generator = GraphGenerator::new(GeneratorConfig { oversize_factor: factor, lattice })
            .expect("factor is valid");
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generator.generate(target, &mut rng).expect("generation must succeed");

        prop_assert_eq!(graph.vertex_count(), target);
        prop_assert_eq!(bfs_component_count(&graph), 1);
    }
}
