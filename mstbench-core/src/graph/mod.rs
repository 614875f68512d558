//! Mutable undirected simple graph with stable vertex and edge identifiers.
//!
//! Vertices and edges live in arenas. Removing a vertex tombstones its slot
//! and every incident edge, so identifiers handed out earlier stay valid for
//! the surviving elements. Algorithms that need contiguous indices work on a
//! [`DenseAdjacency`] snapshot instead.

mod dense;

use std::fmt;

use crate::{error::GraphError, mst::DisjointSet};

pub use self::dense::DenseAdjacency;

/// Stable identifier of a vertex within a [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw arena slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena slot index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Stable identifier of an edge within a [`Graph`].
///
/// Edge ids increase in insertion order, which makes them a deterministic
/// tie-break key for equal weights.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wraps a raw arena slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena slot index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// An undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: Option<u32>,
}

impl Edge {
    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }

    /// Returns the edge weight, if one has been assigned.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Option<u32> { self.weight }

    /// Returns the endpoint opposite to `vertex`, or `None` when `vertex` is
    /// not an endpoint of this edge.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }

    pub(crate) fn set_weight(&mut self, weight: u32) -> Option<u32> {
        self.weight.replace(weight)
    }
}

#[derive(Clone, Debug, Default)]
struct VertexSlot {
    incident: Vec<(VertexId, EdgeId)>,
}

/// A mutable undirected simple graph.
///
/// # Examples
/// ```
/// use mstbench_core::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex();
/// let b = graph.add_vertex();
/// let edge = graph.add_weighted_edge(a, b, 7)?;
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.weight(edge)?, Some(7));
/// assert!(graph.is_connected());
/// # Ok::<(), mstbench_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Option<VertexSlot>>,
    edges: Vec<Option<Edge>>,
    vertex_count: usize,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for the given number of elements.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            vertex_count: 0,
            edge_count: 0,
        }
    }

    /// Number of live vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Number of live edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no live vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Upper bound (exclusive) of every vertex id handed out so far.
    pub(crate) fn vertex_capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Appends a new isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Some(VertexSlot::default()));
        self.vertex_count += 1;
        id
    }

    /// Returns `true` when `vertex` refers to a live vertex.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.slot(vertex).is_ok()
    }

    /// Adds an unweighted edge between `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when an endpoint is missing,
    /// [`GraphError::SelfLoop`] when both endpoints match and
    /// [`GraphError::DuplicateEdge`] when the pair is already connected.
    pub fn add_edge(&mut self, left: VertexId, right: VertexId) -> Result<EdgeId, GraphError> {
        self.insert_edge(left, right, None)
    }

    /// Adds an edge carrying `weight` between `left` and `right`.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::add_edge`].
    pub fn add_weighted_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: u32,
    ) -> Result<EdgeId, GraphError> {
        self.insert_edge(left, right, Some(weight))
    }

    fn insert_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: Option<u32>,
    ) -> Result<EdgeId, GraphError> {
        if left == right {
            self.slot(left)?;
            return Err(GraphError::SelfLoop { vertex: left });
        }
        let (source, target) = if left < right {
            (left, right)
        } else {
            (right, left)
        };
        self.slot(target)?;
        if self.find_edge_from(source, target)?.is_some() {
            return Err(GraphError::DuplicateEdge {
                left: source,
                right: target,
            });
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge {
            source,
            target,
            weight,
        }));
        self.slot_mut(source)?.incident.push((target, id));
        self.slot_mut(target)?.incident.push((source, id));
        self.edge_count += 1;
        Ok(id)
    }

    /// Removes `vertex` together with every incident edge.
    ///
    /// Returns the number of edges removed alongside the vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<usize, GraphError> {
        let slot = self
            .vertices
            .get_mut(vertex.0)
            .and_then(Option::take)
            .ok_or(GraphError::UnknownVertex { vertex })?;
        self.vertex_count -= 1;

        for &(neighbour, edge) in &slot.incident {
            if let Some(Some(other)) = self.vertices.get_mut(neighbour.0) {
                other.incident.retain(|&(_, incident)| incident != edge);
            }
            if let Some(entry) = self.edges.get_mut(edge.0) {
                *entry = None;
            }
        }
        self.edge_count -= slot.incident.len();
        Ok(slot.incident.len())
    }

    /// Iterates over live vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|_| VertexId(index)))
    }

    /// Iterates over live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(index, edge)| edge.as_ref().map(|edge| (EdgeId(index), edge)))
    }

    /// Iterates over live edge ids in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges().map(|(id, _)| id)
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = (EdgeId, &mut Edge)> + '_ {
        self.edges
            .iter_mut()
            .enumerate()
            .filter_map(|(index, edge)| edge.as_mut().map(|edge| (EdgeId(index), edge)))
    }

    /// Looks up a live edge.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEdge`] when `edge` is not live.
    pub fn edge(&self, edge: EdgeId) -> Result<&Edge, GraphError> {
        self.edges
            .get(edge.0)
            .and_then(Option::as_ref)
            .ok_or(GraphError::UnknownEdge { edge })
    }

    /// Returns the id of the edge joining `left` and `right`, if any.
    ///
    /// Unknown vertices yield `None`.
    #[must_use]
    pub fn find_edge(&self, left: VertexId, right: VertexId) -> Option<EdgeId> {
        self.find_edge_from(left, right).ok().flatten()
    }

    fn find_edge_from(
        &self,
        left: VertexId,
        right: VertexId,
    ) -> Result<Option<EdgeId>, GraphError> {
        let slot = self.slot(left)?;
        Ok(slot
            .incident
            .iter()
            .find(|&&(neighbour, _)| neighbour == right)
            .map(|&(_, edge)| edge))
    }

    /// Iterates over the neighbours of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    pub fn neighbours(
        &self,
        vertex: VertexId,
    ) -> Result<impl Iterator<Item = VertexId> + '_, GraphError> {
        Ok(self.slot(vertex)?.incident.iter().map(|&(neighbour, _)| neighbour))
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not live.
    pub fn degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.slot(vertex)?.incident.len())
    }

    /// Returns the weight of `edge`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEdge`] when `edge` is not live.
    pub fn weight(&self, edge: EdgeId) -> Result<Option<u32>, GraphError> {
        Ok(self.edge(edge)?.weight)
    }

    /// Assigns `weight` to `edge`, returning the previous weight.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEdge`] when `edge` is not live.
    pub fn set_weight(&mut self, edge: EdgeId, weight: u32) -> Result<Option<u32>, GraphError> {
        self.edges
            .get_mut(edge.0)
            .and_then(Option::as_mut)
            .map(|entry| entry.set_weight(weight))
            .ok_or(GraphError::UnknownEdge { edge })
    }

    /// Builds a dense, index-addressed snapshot of the live topology.
    #[must_use]
    pub fn dense_adjacency(&self) -> DenseAdjacency {
        DenseAdjacency::from_graph(self)
    }

    /// Counts connected components. An empty graph has zero components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let adjacency = self.dense_adjacency();
        let mut sets = DisjointSet::new(adjacency.len());
        for index in 0..adjacency.len() {
            for &neighbour in adjacency.neighbours(index) {
                sets.union(index, neighbour);
            }
        }
        sets.components()
    }

    /// Returns `true` when every live vertex is reachable from every other.
    ///
    /// The empty graph is considered connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }

    /// Returns the vertices whose removal would disconnect their component.
    #[must_use]
    pub fn articulation_points(&self) -> Vec<VertexId> {
        let adjacency = self.dense_adjacency();
        crate::articulation::find_articulation_points(&adjacency)
            .iter()
            .filter_map(|index| adjacency.vertex_id(index))
            .collect()
    }

    fn slot(&self, vertex: VertexId) -> Result<&VertexSlot, GraphError> {
        self.vertices
            .get(vertex.0)
            .and_then(Option::as_ref)
            .ok_or(GraphError::UnknownVertex { vertex })
    }

    fn slot_mut(&mut self, vertex: VertexId) -> Result<&mut VertexSlot, GraphError> {
        self.vertices
            .get_mut(vertex.0)
            .and_then(Option::as_mut)
            .ok_or(GraphError::UnknownVertex { vertex })
    }

    pub(crate) fn incident(&self, vertex: VertexId) -> &[(VertexId, EdgeId)] {
        self.slot(vertex)
            .map(|slot| slot.incident.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
