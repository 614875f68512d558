use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::test_utils::{
    add_vertices, bfs_component_count, cycle_graph, path_graph, suite_proptest_config,
};

#[test]
fn new_graph_is_empty_and_connected() {
    let graph = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.component_count(), 0);
    assert!(graph.is_connected());
}

#[test]
fn edges_are_stored_in_canonical_order() {
    let mut graph = Graph::new();
    let ids = add_vertices(&mut graph, 2);
    let edge = graph.add_edge(ids[1], ids[0]).expect("edge must insert");

    let stored = graph.edge(edge).expect("edge must exist");
    assert_eq!(stored.source(), ids[0]);
    assert_eq!(stored.target(), ids[1]);
    assert_eq!(stored.weight(), None);
    assert_eq!(stored.opposite(ids[0]), Some(ids[1]));
    assert_eq!(stored.opposite(VertexId::new(9)), None);
}

#[rstest]
#[case::forward(0, 1)]
#[case::reverse(1, 0)]
fn duplicate_edges_are_rejected(#[case] left: usize, #[case] right: usize) {
    let mut graph = Graph::new();
    let ids = add_vertices(&mut graph, 2);
    graph.add_edge(ids[0], ids[1]).expect("first edge must insert");

    let err = graph
        .add_edge(ids[left], ids[right])
        .expect_err("duplicate must fail");
    assert_eq!(
        err,
        GraphError::DuplicateEdge {
            left: ids[0],
            right: ids[1],
        }
    );
    assert_eq!(err.code().as_str(), "GRAPH_DUPLICATE_EDGE");
}

#[test]
fn self_loops_are_rejected() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let err = graph.add_edge(a, a).expect_err("self-loop must fail");
    assert_eq!(err, GraphError::SelfLoop { vertex: a });
}

#[test]
fn unknown_endpoints_are_rejected() {
    let mut graph = Graph::new();
    let a = graph.add_vertex();
    let ghost = VertexId::new(5);
    assert_eq!(
        graph.add_edge(a, ghost),
        Err(GraphError::UnknownVertex { vertex: ghost })
    );
    assert_eq!(
        graph.add_edge(ghost, ghost),
        Err(GraphError::UnknownVertex { vertex: ghost })
    );
}

#[test]
fn removing_a_vertex_drops_incident_edges_and_keeps_other_ids() {
    let mut graph = path_graph(4);
    let doomed = VertexId::new(1);
    let surviving_edge = graph
        .find_edge(VertexId::new(2), VertexId::new(3))
        .expect("edge v2-v3 exists");

    let removed = graph.remove_vertex(doomed).expect("vertex is live");

    assert_eq!(removed, 2);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains_vertex(doomed));
    assert_eq!(graph.degree(VertexId::new(0)), Ok(0));
    assert_eq!(graph.degree(VertexId::new(2)), Ok(1));
    assert!(graph.edge(surviving_edge).is_ok());
    assert_eq!(graph.component_count(), 2);
}

#[test]
fn removing_twice_fails() {
    let mut graph = path_graph(2);
    let a = VertexId::new(0);
    graph.remove_vertex(a).expect("first removal succeeds");
    assert_eq!(
        graph.remove_vertex(a),
        Err(GraphError::UnknownVertex { vertex: a })
    );
}

#[test]
fn new_vertices_never_reuse_removed_ids() {
    let mut graph = path_graph(3);
    graph.remove_vertex(VertexId::new(2)).expect("vertex is live");
    let fresh = graph.add_vertex();
    assert_eq!(fresh, VertexId::new(3));
    assert_eq!(
        graph.vertices().collect::<Vec<_>>(),
        vec![VertexId::new(0), VertexId::new(1), VertexId::new(3)]
    );
}

#[test]
fn set_weight_returns_previous_value() {
    let mut graph = path_graph(2);
    let edge = graph.edge_ids().next().expect("one edge");

    assert_eq!(graph.set_weight(edge, 10), Ok(None));
    assert_eq!(graph.set_weight(edge, 3), Ok(Some(10)));
    assert_eq!(graph.weight(edge), Ok(Some(3)));

    let ghost = EdgeId::new(99);
    assert_eq!(
        graph.set_weight(ghost, 1),
        Err(GraphError::UnknownEdge { edge: ghost })
    );
}

#[test]
fn clones_do_not_share_weights() {
    let mut graph = path_graph(2);
    let edge = graph.edge_ids().next().expect("one edge");
    let copy = graph.clone();
    graph.set_weight(edge, 5).expect("edge is live");
    assert_eq!(copy.weight(edge), Ok(None));
}

#[test]
fn dense_adjacency_skips_tombstones() {
    let mut graph = cycle_graph(5);
    graph.remove_vertex(VertexId::new(2)).expect("vertex is live");

    let dense = graph.dense_adjacency();
    assert_eq!(dense.len(), 4);
    assert_eq!(dense.edge_count(), 3);
    assert_eq!(dense.index_of(VertexId::new(2)), None);
    assert_eq!(dense.index_of(VertexId::new(3)), Some(2));
    assert_eq!(dense.vertex_id(2), Some(VertexId::new(3)));

    let mut around_v0: Vec<usize> = dense.neighbours(0).to_vec();
    around_v0.sort_unstable();
    assert_eq!(around_v0, vec![1, 3]);
    assert!(dense.neighbours(42).is_empty());
    assert_eq!(dense.incident(0).count(), 2);
}

#[rstest]
#[case::path(path_graph(5), vec![1, 2, 3])]
#[case::cycle(cycle_graph(5), vec![])]
#[case::single_edge(path_graph(2), vec![])]
fn articulation_points_by_shape(#[case] graph: Graph, #[case] expected: Vec<usize>) {
    let expected: Vec<VertexId> = expected.into_iter().map(VertexId::new).collect();
    assert_eq!(graph.articulation_points(), expected);
}

#[test]
fn ids_render_with_prefixes() {
    assert_eq!(VertexId::new(4).to_string(), "v4");
    assert_eq!(EdgeId::new(7).to_string(), "e7");
}

fn random_graph() -> impl Strategy<Value = Graph> {
    (1_usize..12).prop_flat_map(|nodes| {
        proptest::collection::vec((0..nodes, 0..nodes), 0..nodes * 2).prop_map(move |pairs| {
            let mut graph = Graph::new();
            let ids = add_vertices(&mut graph, nodes);
            for (left, right) in pairs {
                // Self-loops and repeats are rejected and simply skipped.
                let _ = graph.add_edge(ids[left], ids[right]);
            }
            graph
        })
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn component_count_matches_bfs(graph in random_graph()) {
        prop_assert_eq!(graph.component_count(), bfs_component_count(&graph));
    }

    #[test]
    fn removal_keeps_counts_consistent(
        graph in random_graph(),
        pick in any::<prop::sample::Index>()
    ) {
        let mut graph = graph;
        let victims: Vec<VertexId> = graph.vertices().collect();
        let victim = victims[pick.index(victims.len())];
        let degree = graph.degree(victim).expect("vertex is live");
        let edges_before = graph.edge_count();

        let removed = graph.remove_vertex(victim).expect("vertex is live");

        prop_assert_eq!(removed, degree);
        prop_assert_eq!(graph.edge_count(), edges_before - degree);
        prop_assert_eq!(graph.edges().count(), graph.edge_count());
        prop_assert_eq!(graph.vertices().count(), graph.vertex_count());
        for (_, edge) in graph.edges() {
            prop_assert!(graph.contains_vertex(edge.source()));
            prop_assert!(graph.contains_vertex(edge.target()));
        }
    }
}
