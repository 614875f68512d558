//! Articulation point detection over a [`DenseAdjacency`].
//!
//! Uses an explicit-stack depth-first traversal that records a discovery time
//! and a low-link value per vertex. A traversal root is an articulation point
//! when it has more than one DFS child; any other vertex `u` is one when some
//! child `v` satisfies `low[v] >= disc[u]`.

use crate::graph::DenseAdjacency;

/// Set of dense vertex indices that are articulation points.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArticulationPoints {
    flags: Vec<bool>,
    count: usize,
}

impl ArticulationPoints {
    /// Returns `true` when `index` is an articulation point.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Number of articulation points found.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.count }

    /// Returns `true` when the graph has no articulation point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates over articulation point indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
    }
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    cursor: usize,
}

/// Finds every articulation point of an undirected graph.
///
/// Each unvisited vertex starts a fresh traversal, so disconnected inputs are
/// analysed component by component.
///
/// # Examples
/// ```
/// use mstbench_core::{Graph, find_articulation_points};
///
/// // a - b - c: only the middle vertex holds the path together.
/// let mut graph = Graph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// let c = graph.add_vertex();
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
///
/// let dense = graph.dense_adjacency();
/// let points = find_articulation_points(&dense);
/// assert_eq!(points.iter().collect::<Vec<_>>(), vec![1]);
/// # Ok::<(), mstbench_core::GraphError>(())
/// ```
#[must_use]
pub fn find_articulation_points(adjacency: &DenseAdjacency) -> ArticulationPoints {
    let len = adjacency.len();
    // Zero marks an unvisited vertex; discovery times start at 1.
    let mut disc = vec![0_usize; len];
    let mut low = vec![0_usize; len];
    let mut flags = vec![false; len];
    let mut timer = 0_usize;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..len {
        if disc[root] != 0 {
            continue;
        }
        timer += 1;
        disc[root] = timer;
        low[root] = timer;
        let mut root_children = 0_usize;
        stack.push(Frame {
            vertex: root,
            parent: None,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.vertex;
            let parent = frame.parent;
            let next = adjacency.neighbours(vertex).get(frame.cursor).copied();
            frame.cursor += 1;

            match next {
                Some(child) if disc[child] == 0 => {
                    if vertex == root {
                        root_children += 1;
                    }
                    timer += 1;
                    disc[child] = timer;
                    low[child] = timer;
                    stack.push(Frame {
                        vertex: child,
                        parent: Some(vertex),
                        cursor: 0,
                    });
                }
                Some(neighbour) => {
                    if Some(neighbour) != parent {
                        low[vertex] = low[vertex].min(disc[neighbour]);
                    }
                }
                None => {
                    stack.pop();
                    if let Some(parent) = parent {
                        low[parent] = low[parent].min(low[vertex]);
                        if parent != root && low[vertex] >= disc[parent] {
                            flags[parent] = true;
                        }
                    }
                }
            }
        }

        if root_children > 1 {
            flags[root] = true;
        }
    }

    let count = flags.iter().filter(|&&flag| flag).count();
    ArticulationPoints { flags, count }
}
