//! Dense, index-addressed snapshot of a [`Graph`].
//!
//! Live vertices are renumbered `0..len` in ascending id order and their
//! neighbourhoods are stored in compressed sparse row form.

use std::ops::Range;

use super::{EdgeId, Graph, VertexId};

/// Compressed adjacency over the live vertices of a [`Graph`].
///
/// # Examples
/// ```
/// use mstbench_core::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// graph.add_edge(a, b)?;
/// graph.remove_vertex(a)?;
/// let c = graph.add_vertex();
/// graph.add_edge(b, c)?;
///
/// let dense = graph.dense_adjacency();
/// assert_eq!(dense.len(), 2);
/// assert_eq!(dense.index_of(b), Some(0));
/// assert_eq!(dense.neighbours(0), &[1]);
/// # Ok::<(), mstbench_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DenseAdjacency {
    ids: Vec<VertexId>,
    slots: Vec<Option<usize>>,
    offsets: Vec<usize>,
    neighbours: Vec<usize>,
    edges: Vec<EdgeId>,
}

impl DenseAdjacency {
    pub(super) fn from_graph(graph: &Graph) -> Self {
        let ids: Vec<VertexId> = graph.vertices().collect();
        let mut slots = vec![None; graph.vertex_capacity()];
        for (index, id) in ids.iter().enumerate() {
            if let Some(slot) = slots.get_mut(id.index()) {
                *slot = Some(index);
            }
        }

        let mut offsets = Vec::with_capacity(ids.len() + 1);
        let mut neighbours = Vec::with_capacity(graph.edge_count() * 2);
        let mut edges = Vec::with_capacity(graph.edge_count() * 2);
        offsets.push(0);
        for &id in &ids {
            for &(neighbour, edge) in graph.incident(id) {
                if let Some(Some(index)) = slots.get(neighbour.index()) {
                    neighbours.push(*index);
                    edges.push(edge);
                }
            }
            offsets.push(neighbours.len());
        }

        Self {
            ids,
            slots,
            offsets,
            neighbours,
            edges,
        }
    }

    /// Number of vertices in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when the snapshot has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of undirected edges in the snapshot.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbours.len() / 2
    }

    /// Maps a dense index back to the stable vertex id.
    #[must_use]
    pub fn vertex_id(&self, index: usize) -> Option<VertexId> {
        self.ids.get(index).copied()
    }

    /// Returns the stable vertex ids in dense order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_ids(&self) -> &[VertexId] { &self.ids }

    /// Maps a stable vertex id to its dense index.
    #[must_use]
    pub fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.slots.get(vertex.index()).copied().flatten()
    }

    /// Dense indices adjacent to `index`. Out-of-range indices yield an empty
    /// slice.
    #[must_use]
    pub fn neighbours(&self, index: usize) -> &[usize] {
        self.row(index)
            .and_then(|range| self.neighbours.get(range))
            .unwrap_or_default()
    }

    /// Iterates over `(neighbour index, edge id)` pairs incident to `index`.
    pub fn incident(&self, index: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_ {
        let range = self.row(index).unwrap_or(0..0);
        let neighbours = self.neighbours.get(range.clone()).unwrap_or_default();
        let edges = self.edges.get(range).unwrap_or_default();
        neighbours.iter().copied().zip(edges.iter().copied())
    }

    fn row(&self, index: usize) -> Option<Range<usize>> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        Some(start..end)
    }
}
