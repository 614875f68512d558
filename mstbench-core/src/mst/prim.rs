//! Lazy Prim over prepared working edges.
//!
//! Candidate edges sit in a min-heap keyed by `(weight, edge id)`; stale
//! entries whose far endpoint already joined the tree are skipped on pop.

use std::{cmp::Reverse, collections::BinaryHeap};

use super::WorkingEdge;

/// Groups working-edge positions by dense endpoint.
pub(super) fn incidence(node_count: usize, edges: &[WorkingEdge]) -> Vec<Vec<usize>> {
    let mut incidence = vec![Vec::new(); node_count];
    for (position, edge) in edges.iter().enumerate() {
        incidence[edge.source].push(position);
        incidence[edge.target].push(position);
    }
    incidence
}

/// Grows a tree from dense vertex `0`, always taking the lightest edge that
/// leaves the tree.
pub(super) fn prim(
    node_count: usize,
    edges: &[WorkingEdge],
    incidence: &[Vec<usize>],
) -> Vec<WorkingEdge> {
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    if node_count == 0 {
        return accepted;
    }

    let mut in_tree = vec![false; node_count];
    let mut heap = BinaryHeap::new();
    enter(0, edges, incidence, &mut in_tree, &mut heap);

    while accepted.len() + 1 < node_count {
        let Some(Reverse(candidate)) = heap.pop() else {
            break;
        };
        let next = if !in_tree[candidate.source] {
            candidate.source
        } else if !in_tree[candidate.target] {
            candidate.target
        } else {
            continue;
        };
        accepted.push(candidate);
        enter(next, edges, incidence, &mut in_tree, &mut heap);
    }
    accepted
}

fn enter(
    vertex: usize,
    edges: &[WorkingEdge],
    incidence: &[Vec<usize>],
    in_tree: &mut [bool],
    heap: &mut BinaryHeap<Reverse<WorkingEdge>>,
) {
    in_tree[vertex] = true;
    let Some(positions) = incidence.get(vertex) else {
        return;
    };
    for edge in positions.iter().filter_map(|&position| edges.get(position)) {
        let far = if edge.source == vertex {
            edge.target
        } else {
            edge.source
        };
        if !in_tree[far] {
            heap.push(Reverse(*edge));
        }
    }
}
