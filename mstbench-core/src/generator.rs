//! Connected random graph generation.
//!
//! A square lattice is built slightly larger than requested and then trimmed
//! one vertex at a time. Only vertices that are not articulation points are
//! eligible for removal, so the graph stays connected after every step.

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    articulation::find_articulation_points,
    error::GenerateError,
    graph::{Graph, VertexId},
};

/// Default oversizing factor applied to the target before building the lattice.
pub const DEFAULT_OVERSIZE_FACTOR: f64 = 1.2;

/// Shape of the lattice grown before trimming.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LatticeKind {
    /// Grid where every cell also carries both diagonals.
    #[default]
    Crossed,
    /// Plain grid with horizontal and vertical edges only.
    Orthogonal,
}

impl LatticeKind {
    /// Returns the lowercase label used by logs and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crossed => "crossed",
            Self::Orthogonal => "orthogonal",
        }
    }
}

/// Tunables for [`GraphGenerator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Multiplier applied to the target vertex count when sizing the lattice.
    pub oversize_factor: f64,
    /// Lattice shape.
    pub lattice: LatticeKind,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            oversize_factor: DEFAULT_OVERSIZE_FACTOR,
            lattice: LatticeKind::default(),
        }
    }
}

/// Produces connected graphs with an exact vertex count.
///
/// # Examples
/// ```
/// use mstbench_core::{GeneratorConfig, GraphGenerator};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let generator = GraphGenerator::new(GeneratorConfig::default())?;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = generator.generate(20, &mut rng)?;
/// assert_eq!(graph.vertex_count(), 20);
/// assert!(graph.is_connected());
/// # Ok::<(), mstbench_core::GenerateError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphGenerator {
    config: GeneratorConfig,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }
}

impl GraphGenerator {
    /// Validates `config` and constructs a generator.
    ///
    /// # Errors
    /// Returns [`GenerateError::InvalidOversizeFactor`] when the factor is not
    /// finite or is below `1.0`.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        let factor = config.oversize_factor;
        if !factor.is_finite() || factor < 1.0 {
            return Err(GenerateError::InvalidOversizeFactor { factor });
        }
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    #[must_use]
    #[rustfmt::skip]
    pub fn config(&self) -> &GeneratorConfig { &self.config }

    /// Side length of the square lattice built for `target` vertices.
    ///
    /// # Errors
    /// Returns [`GenerateError::ZeroTarget`] for a zero target and
    /// [`GenerateError::LatticeOverflow`] when the lattice cannot be addressed.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_arithmetic,
        reason = "lattice sizing scales the target by a floating-point factor"
    )]
    pub fn lattice_side(&self, target: usize) -> Result<usize, GenerateError> {
        if target == 0 {
            return Err(GenerateError::ZeroTarget);
        }
        let scaled = (target as f64 * self.config.oversize_factor).sqrt().ceil();
        if !scaled.is_finite() || scaled >= usize::MAX as f64 {
            return Err(GenerateError::LatticeOverflow { target });
        }
        let mut side = (scaled as usize).max(1);
        loop {
            let area = side
                .checked_mul(side)
                .ok_or(GenerateError::LatticeOverflow { target })?;
            if area >= target {
                return Ok(side);
            }
            side += 1;
        }
    }

    /// Generates a connected graph with exactly `target` vertices.
    ///
    /// # Errors
    /// Returns [`GenerateError::ZeroTarget`] for a zero target,
    /// [`GenerateError::NoRemovableVertex`] if trimming stalls and
    /// [`GenerateError::Postcondition`] if the result is not a connected graph
    /// of the requested size.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(target = target, lattice = self.config.lattice.as_str()),
    )]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        target: usize,
        rng: &mut R,
    ) -> Result<Graph, GenerateError> {
        let side = self.lattice_side(target)?;
        let mut graph = build_lattice(side, target, self.config.lattice)?;
        let initial = graph.vertex_count();
        trim_to(&mut graph, target, rng)?;

        let components = graph.component_count();
        if graph.vertex_count() != target || components != 1 {
            return Err(GenerateError::Postcondition {
                expected: target,
                actual: graph.vertex_count(),
                components,
            });
        }

        debug!(
            side,
            initial,
            removed = initial - target,
            edges = graph.edge_count(),
            "graph generated"
        );
        Ok(graph)
    }
}

/// Builds a `side` x `side` lattice for a graph that will be trimmed to
/// `target` vertices.
///
/// Growth proceeds one ring at a time from a single vertex, so `side - 1`
/// construction steps yield `side * side` vertices. Vertex `(row, col)` has id
/// `row * side + col`.
pub(crate) fn build_lattice(
    side: usize,
    target: usize,
    kind: LatticeKind,
) -> Result<Graph, GenerateError> {
    let vertex_total = side
        .checked_mul(side)
        .ok_or(GenerateError::LatticeOverflow { target })?;
    let per_vertex = match kind {
        LatticeKind::Crossed => 4,
        LatticeKind::Orthogonal => 2,
    };
    let mut graph = Graph::with_capacity(vertex_total, vertex_total.saturating_mul(per_vertex));
    for _ in 0..vertex_total {
        graph.add_vertex();
    }
    // A fresh graph hands out vertex ids densely from zero.
    let at = |row: usize, col: usize| VertexId::new(row * side + col);

    for row in 0..side {
        for col in 0..side {
            let has_right = col + 1 < side;
            let has_down = row + 1 < side;
            if has_right {
                graph.add_edge(at(row, col), at(row, col + 1))?;
            }
            if has_down {
                graph.add_edge(at(row, col), at(row + 1, col))?;
            }
            if kind == LatticeKind::Crossed && has_right && has_down {
                graph.add_edge(at(row, col), at(row + 1, col + 1))?;
                graph.add_edge(at(row, col + 1), at(row + 1, col))?;
            }
        }
    }
    Ok(graph)
}

/// Removes uniformly drawn non-articulation vertices until `target` remain.
fn trim_to<R: Rng + ?Sized>(
    graph: &mut Graph,
    target: usize,
    rng: &mut R,
) -> Result<(), GenerateError> {
    while graph.vertex_count() > target {
        let adjacency = graph.dense_adjacency();
        let articulation = find_articulation_points(&adjacency);
        let removable: Vec<VertexId> = adjacency
            .vertex_ids()
            .iter()
            .enumerate()
            .filter_map(|(index, &id)| (!articulation.contains(index)).then_some(id))
            .collect();

        let Some(&victim) = removable.choose(rng) else {
            return Err(GenerateError::NoRemovableVertex {
                remaining: graph.vertex_count(),
                target,
            });
        };
        graph.remove_vertex(victim)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
