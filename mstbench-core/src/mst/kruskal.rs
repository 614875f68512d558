//! Sequential Kruskal over prepared working edges.

use super::{WorkingEdge, union_find::DisjointSet};

/// Sorts `edges` by `(weight, edge id)` and accepts every edge that joins two
/// different components, stopping once a single component remains.
pub(super) fn kruskal(node_count: usize, edges: &mut [WorkingEdge]) -> Vec<WorkingEdge> {
    edges.sort_unstable();

    let mut sets = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    for edge in edges.iter() {
        if sets.components() <= 1 {
            break;
        }
        if sets.union(edge.source, edge.target) {
            accepted.push(*edge);
        }
    }
    accepted
}
