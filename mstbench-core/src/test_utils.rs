//! Shared test utilities for `mstbench-core`.

use mstbench_test_support::proptest_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{EdgeId, Graph, VertexId};

/// Builds a proptest configuration honouring the shared case-count override.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: ProptestRunProfile::load(default_cases).cases(),
        ..ProptestConfig::default()
    }
}

/// Adds `count` fresh vertices and returns their ids in insertion order.
pub(crate) fn add_vertices(graph: &mut Graph, count: usize) -> Vec<VertexId> {
    (0..count).map(|_| graph.add_vertex()).collect()
}

/// Builds an unweighted path `v0 - v1 - .. - v(n-1)`.
pub(crate) fn path_graph(len: usize) -> Graph {
    let mut graph = Graph::new();
    let ids = add_vertices(&mut graph, len);
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).expect("path edge is valid");
    }
    graph
}

/// Builds an unweighted cycle over `len` vertices (`len >= 3`).
pub(crate) fn cycle_graph(len: usize) -> Graph {
    let mut graph = path_graph(len);
    graph
        .add_edge(VertexId::new(len - 1), VertexId::new(0))
        .expect("closing edge is valid");
    graph
}

/// Builds a weighted graph from `(left, right, weight)` triples over `nodes`
/// vertices and returns it with the edge ids in triple order.
pub(crate) fn weighted_graph(nodes: usize, edges: &[(usize, usize, u32)]) -> (Graph, Vec<EdgeId>) {
    let mut graph = Graph::new();
    let ids = add_vertices(&mut graph, nodes);
    let edge_ids = edges
        .iter()
        .map(|&(left, right, weight)| {
            graph
                .add_weighted_edge(ids[left], ids[right], weight)
                .expect("weighted edge is valid")
        })
        .collect();
    (graph, edge_ids)
}

/// Counts components by breadth-first search, independently of the disjoint
/// set used by [`Graph::component_count`].
pub(crate) fn bfs_component_count(graph: &Graph) -> usize {
    use std::collections::{HashSet, VecDeque};

    let mut seen = HashSet::new();
    let mut components = 0;
    for start in graph.vertices() {
        if !seen.insert(start) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for neighbour in graph.neighbours(vertex).expect("vertex is live") {
                if seen.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
    }
    components
}
