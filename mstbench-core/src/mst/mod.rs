//! Minimum spanning tree (MST) computation over randomly weighted graphs.
//!
//! The engine copies the generated topology, assigns uniform random weights,
//! and designates one edge as the critical link. That edge runs with a working
//! weight of zero so both strategies are forced to accept it; its true weight
//! is restored once the strategy returns. Only the strategy itself is timed.

mod kruskal;
mod prim;
mod union_find;

use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, MstError},
    graph::{DenseAdjacency, EdgeId, Graph, VertexId},
};

pub use self::union_find::DisjointSet;

/// Smallest weight drawn for an edge.
pub const MIN_EDGE_WEIGHT: u32 = 1;
/// Largest weight drawn for an edge.
pub const MAX_EDGE_WEIGHT: u32 = 500;
/// Working weight of the critical link while a strategy runs.
pub const CRITICAL_LINK_WEIGHT: u32 = 0;

/// Algorithm used to grow the spanning tree.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MstStrategy {
    /// Sort edges globally and join components with a disjoint set.
    #[default]
    Kruskal,
    /// Grow a single tree from one vertex with a binary heap.
    Prim,
}

impl MstStrategy {
    /// Returns the lowercase label used by logs and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for MstStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`MstStrategy`] label.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown MST strategy `{0}`; expected `kruskal` or `prim`")]
pub struct UnknownStrategy(pub String);

impl FromStr for MstStrategy {
    type Err = UnknownStrategy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            other => Err(UnknownStrategy(other.to_owned())),
        }
    }
}

/// An edge accepted into the spanning tree, carrying its true weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MstEdge {
    edge: EdgeId,
    source: VertexId,
    target: VertexId,
    weight: u32,
}

impl MstEdge {
    /// Returns the id of the edge in the weighted graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> EdgeId { self.edge }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> VertexId { self.target }

    /// Returns the true (restored) edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u32 { self.weight }
}

/// The edge forced into the tree for one MST run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CriticalLink {
    edge: EdgeId,
    source: VertexId,
    target: VertexId,
    original_weight: u32,
}

impl CriticalLink {
    /// Returns the id of the critical edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> EdgeId { self.edge }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> VertexId { self.target }

    /// Returns the weight the edge carried before it was zeroed.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_weight(&self) -> u32 { self.original_weight }
}

/// Output of one MST run.
#[derive(Clone, Debug)]
pub struct MstResult {
    strategy: MstStrategy,
    edges: Vec<MstEdge>,
    critical_link: CriticalLink,
    elapsed: Duration,
    graph: Graph,
}

impl MstResult {
    /// Strategy that produced the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> MstStrategy { self.strategy }

    /// Accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// The critical link forced into the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn critical_link(&self) -> &CriticalLink { &self.critical_link }

    /// Wall-clock time spent inside the strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// The weighted copy the tree was computed on, with the critical link
    /// carrying its original weight again.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Consumes the result and returns the weighted graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Sum of the true weights of all accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight)).sum()
    }

    /// Returns `true` when `edge` is part of the tree.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.iter().any(|accepted| accepted.edge == edge)
    }
}

/// An edge prepared for a strategy: dense endpoints plus the working weight.
///
/// Ordering is by `(weight, edge)`, which keeps equal-weight edges in
/// insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct WorkingEdge {
    weight: u32,
    edge: EdgeId,
    source: usize,
    target: usize,
}

/// Returns a copy of `graph` with every edge weighted uniformly in
/// [`MIN_EDGE_WEIGHT`]`..=`[`MAX_EDGE_WEIGHT`].
///
/// Weights are drawn in edge insertion order, so a seeded generator yields the
/// same weights for the same topology.
pub fn assign_random_weights<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Graph {
    let mut weighted = graph.clone();
    for (_, edge) in weighted.edges_mut() {
        edge.set_weight(rng.gen_range(MIN_EDGE_WEIGHT..=MAX_EDGE_WEIGHT));
    }
    weighted
}

/// Computes minimum spanning trees with a fixed [`MstStrategy`].
///
/// # Examples
/// ```
/// use mstbench_core::{GraphGenerator, MstEngine, MstStrategy};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let graph = GraphGenerator::default().generate(12, &mut rng)?;
/// let result = MstEngine::new(MstStrategy::Prim).compute(&graph, &mut rng)?;
/// assert_eq!(result.edges().len(), 11);
/// assert!(result.contains_edge(result.critical_link().edge()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstEngine {
    strategy: MstStrategy,
}

impl MstEngine {
    /// Creates an engine for `strategy`.
    #[must_use]
    pub const fn new(strategy: MstStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> MstStrategy { self.strategy }

    /// Weights a copy of `graph`, picks a critical link uniformly at random and
    /// solves the MST. The input graph is never modified.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] for a graph without vertices,
    /// [`MstError::NoEdges`] when no critical link can be chosen and the
    /// errors of [`Self::solve`].
    pub fn compute<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        rng: &mut R,
    ) -> Result<MstResult, MstError> {
        if graph.is_empty() {
            return Err(MstError::EmptyGraph);
        }
        let weighted = assign_random_weights(graph, rng);
        let edge_ids: Vec<EdgeId> = weighted.edge_ids().collect();
        let critical = *edge_ids.choose(rng).ok_or(MstError::NoEdges {
            vertex_count: weighted.vertex_count(),
        })?;
        self.solve(weighted, critical)
    }

    /// Solves the MST of an already weighted graph with `critical` forced in.
    ///
    /// The critical link's weight is zeroed for the duration of the strategy
    /// and restored before returning, on success and on failure alike.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] for a graph without vertices,
    /// [`MstError::Graph`] when `critical` does not exist,
    /// [`MstError::MissingWeight`] when any edge is unweighted and
    /// [`MstError::Disconnected`] when the tree cannot span the graph.
    #[instrument(
        name = "core.mst",
        err,
        skip(self, weighted),
        fields(
            strategy = self.strategy.as_str(),
            vertices = weighted.vertex_count(),
            edges = weighted.edge_count(),
        ),
    )]
    pub fn solve(&self, mut weighted: Graph, critical: EdgeId) -> Result<MstResult, MstError> {
        if weighted.is_empty() {
            return Err(MstError::EmptyGraph);
        }
        let critical_edge = *weighted.edge(critical)?;
        let original_weight = critical_edge
            .weight()
            .ok_or(MstError::MissingWeight { edge: critical })?;

        weighted.set_weight(critical, CRITICAL_LINK_WEIGHT)?;
        let outcome = self.run_strategy(&weighted);
        weighted.set_weight(critical, original_weight)?;
        let (accepted, elapsed) = outcome?;

        let vertex_count = weighted.vertex_count();
        if accepted.len() + 1 != vertex_count {
            return Err(MstError::Disconnected {
                vertex_count,
                components: weighted.component_count(),
            });
        }
        if !accepted.iter().any(|edge| edge.edge == critical) {
            return Err(MstError::CriticalLinkExcluded {
                strategy: self.strategy,
                edge: critical,
            });
        }

        let edges = accepted
            .iter()
            .map(|working| {
                let edge = weighted.edge(working.edge)?;
                Ok(MstEdge {
                    edge: working.edge,
                    source: edge.source(),
                    target: edge.target(),
                    weight: edge
                        .weight()
                        .ok_or(MstError::MissingWeight { edge: working.edge })?,
                })
            })
            .collect::<Result<Vec<_>, MstError>>()?;

        debug!(
            elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            critical = %critical,
            "spanning tree computed"
        );

        Ok(MstResult {
            strategy: self.strategy,
            edges,
            critical_link: CriticalLink {
                edge: critical,
                source: critical_edge.source(),
                target: critical_edge.target(),
                original_weight,
            },
            elapsed,
            graph: weighted,
        })
    }

    /// Prepares the working edges, then times the strategy.
    ///
    /// The window covers each strategy's own bookkeeping: Kruskal's sort and
    /// disjoint set, Prim's incidence lists and heap.
    fn run_strategy(&self, weighted: &Graph) -> Result<(Vec<WorkingEdge>, Duration), MstError> {
        let adjacency = weighted.dense_adjacency();
        let mut edges = working_edges(weighted, &adjacency)?;
        let node_count = adjacency.len();

        let started = Instant::now();
        let accepted = match self.strategy {
            MstStrategy::Kruskal => kruskal::kruskal(node_count, &mut edges),
            MstStrategy::Prim => {
                let incidence = prim::incidence(node_count, &edges);
                prim::prim(node_count, &edges, &incidence)
            }
        };
        Ok((accepted, started.elapsed()))
    }
}

fn working_edges(
    weighted: &Graph,
    adjacency: &DenseAdjacency,
) -> Result<Vec<WorkingEdge>, MstError> {
    weighted
        .edges()
        .map(|(id, edge)| {
            let weight = edge.weight().ok_or(MstError::MissingWeight { edge: id })?;
            let source = adjacency
                .index_of(edge.source())
                .ok_or(GraphError::UnknownVertex {
                    vertex: edge.source(),
                })?;
            let target = adjacency
                .index_of(edge.target())
                .ok_or(GraphError::UnknownVertex {
                    vertex: edge.target(),
                })?;
            Ok(WorkingEdge {
                weight,
                edge: id,
                source,
                target,
            })
        })
        .collect()
}
