//! Error types for the mstbench core library.
//!
//! Each pipeline stage exposes its own error enum together with a stable,
//! machine-readable code so logging surfaces can report failures without
//! parsing messages.

use std::fmt;

use thiserror::Error;

use crate::{
    graph::{EdgeId, VertexId},
    mst::MstStrategy,
};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex id does not refer to a live vertex.
    #[error("vertex {vertex} does not exist")]
    UnknownVertex {
        /// The offending vertex id.
        vertex: VertexId,
    },
    /// The edge id does not refer to a live edge.
    #[error("edge {edge} does not exist")]
    UnknownEdge {
        /// The offending edge id.
        edge: EdgeId,
    },
    /// Both endpoints of the requested edge are the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The vertex that would have been connected to itself.
        vertex: VertexId,
    },
    /// An edge between the two vertices already exists.
    #[error("an edge between {left} and {right} already exists")]
    DuplicateEdge {
        /// Smaller endpoint of the existing edge.
        left: VertexId,
        /// Larger endpoint of the existing edge.
        right: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The vertex id does not refer to a live vertex.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// The edge id does not refer to a live edge.
        UnknownEdge => UnknownEdge { .. } => "GRAPH_UNKNOWN_EDGE",
        /// Both endpoints of the requested edge are the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge between the two vertices already exists.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
    }
}

/// Error type produced by [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
    /// The requested vertex count was zero.
    #[error("target vertex count must be at least 1")]
    ZeroTarget,
    /// The oversizing factor was not a finite number of at least `1.0`.
    #[error("oversize factor must be finite and at least 1.0 (got {factor})")]
    InvalidOversizeFactor {
        /// The rejected factor.
        factor: f64,
    },
    /// The lattice needed for the target does not fit in memory addressing.
    #[error("a lattice for {target} vertices exceeds the addressable size")]
    LatticeOverflow {
        /// The requested vertex count.
        target: usize,
    },
    /// Every remaining vertex was an articulation point before reaching the target.
    #[error("no removable vertex left with {remaining} vertices (target {target})")]
    NoRemovableVertex {
        /// Live vertices when trimming stalled.
        remaining: usize,
        /// The requested vertex count.
        target: usize,
    },
    /// The trimmed graph did not have the target size or lost connectivity.
    #[error(
        "generated graph has {actual} vertices (expected {expected}) and {components} components"
    )]
    Postcondition {
        /// The requested vertex count.
        expected: usize,
        /// The vertex count actually produced.
        actual: usize,
        /// Number of connected components in the produced graph.
        components: usize,
    },
    /// A graph mutation failed while building or trimming the lattice.
    #[error("graph operation failed: {source}")]
    Graph {
        /// The underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// The requested vertex count was zero.
        ZeroTarget => ZeroTarget => "GENERATE_ZERO_TARGET",
        /// The oversizing factor was invalid.
        InvalidOversizeFactor => InvalidOversizeFactor { .. } => "GENERATE_INVALID_OVERSIZE_FACTOR",
        /// The lattice would be too large to address.
        LatticeOverflow => LatticeOverflow { .. } => "GENERATE_LATTICE_OVERFLOW",
        /// Trimming ran out of removable vertices.
        NoRemovableVertex => NoRemovableVertex { .. } => "GENERATE_NO_REMOVABLE_VERTEX",
        /// The generated graph violated its size or connectivity guarantee.
        Postcondition => Postcondition { .. } => "GENERATE_POSTCONDITION",
        /// A graph mutation failed.
        Graph => Graph { .. } => "GENERATE_GRAPH",
    }
}

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// The graph has no edge that could serve as the critical link.
    #[error("graph with {vertex_count} vertices has no edges to choose a critical link from")]
    NoEdges {
        /// Number of vertices in the edgeless graph.
        vertex_count: usize,
    },
    /// An edge had no weight assigned before solving.
    #[error("edge {edge} has no weight")]
    MissingWeight {
        /// The unweighted edge.
        edge: EdgeId,
    },
    /// The spanning structure did not reach every vertex.
    #[error("graph is disconnected: {components} components across {vertex_count} vertices")]
    Disconnected {
        /// Number of vertices in the input graph.
        vertex_count: usize,
        /// Number of connected components in the input graph.
        components: usize,
    },
    /// The strategy finished without accepting the critical link.
    #[error("{strategy} excluded critical link {edge}")]
    CriticalLinkExcluded {
        /// The strategy that produced the tree.
        strategy: MstStrategy,
        /// The critical link that should have been included.
        edge: EdgeId,
    },
    /// A graph lookup failed while preparing or restoring weights.
    #[error("graph operation failed: {source}")]
    Graph {
        /// The underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST for an empty graph.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// No edge was available as the critical link.
        NoEdges => NoEdges { .. } => "MST_NO_EDGES",
        /// An edge had no weight.
        MissingWeight => MissingWeight { .. } => "MST_MISSING_WEIGHT",
        /// The input graph was disconnected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The critical link did not make it into the tree.
        CriticalLinkExcluded => CriticalLinkExcluded { .. } => "MST_CRITICAL_LINK_EXCLUDED",
        /// A graph lookup failed.
        Graph => Graph { .. } => "MST_GRAPH",
    }
}

/// Error type produced when configuring or running a [`crate::Benchmark`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BenchmarkError {
    /// The vertex step was zero.
    #[error("vertex step must be at least 1")]
    ZeroVertexStep,
    /// The vertex step yields single-vertex graphs, which have no spanning edge.
    #[error("vertex step {vertex_step} is below the minimum of 2")]
    StepBelowTwo {
        /// The rejected vertex step.
        vertex_step: usize,
    },
    /// The number of trials per step was zero.
    #[error("trials per step must be at least 1")]
    ZeroTrials,
    /// The configured range produces no size step.
    #[error("max vertices {max_vertices} is below the vertex step {vertex_step}")]
    EmptySchedule {
        /// Configured vertex step.
        vertex_step: usize,
        /// Configured maximum vertex count.
        max_vertices: usize,
    },
    /// More trials were requested than can be averaged.
    #[error("{trials} trials per step exceeds the supported maximum of {max}", max = u32::MAX)]
    TooManyTrials {
        /// The rejected trial count.
        trials: usize,
    },
    /// The generator configuration was rejected.
    #[error("invalid generator configuration: {source}")]
    Generator {
        /// The underlying generator error.
        #[source]
        source: GenerateError,
    },
    /// Generating a trial graph failed.
    #[error("trial {trial} for {vertex_count} vertices failed to generate: {source}")]
    Generation {
        /// Target vertex count of the failing step.
        vertex_count: usize,
        /// Zero-based trial index within the step.
        trial: usize,
        /// The underlying generator error.
        #[source]
        source: GenerateError,
    },
    /// Computing the MST for a trial failed.
    #[error("trial {trial} for {vertex_count} vertices failed to compute an MST: {source}")]
    Mst {
        /// Target vertex count of the failing step.
        vertex_count: usize,
        /// Zero-based trial index within the step.
        trial: usize,
        /// The underlying MST error.
        #[source]
        source: MstError,
    },
}

define_error_codes! {
    /// Stable codes describing [`BenchmarkError`] variants.
    enum BenchmarkErrorCode for BenchmarkError {
        /// The vertex step was zero.
        ZeroVertexStep => ZeroVertexStep => "BENCHMARK_ZERO_VERTEX_STEP",
        /// The vertex step yields single-vertex graphs.
        StepBelowTwo => StepBelowTwo { .. } => "BENCHMARK_STEP_BELOW_TWO",
        /// The number of trials per step was zero.
        ZeroTrials => ZeroTrials => "BENCHMARK_ZERO_TRIALS",
        /// The configured range produces no size step.
        EmptySchedule => EmptySchedule { .. } => "BENCHMARK_EMPTY_SCHEDULE",
        /// More trials were requested than can be averaged.
        TooManyTrials => TooManyTrials { .. } => "BENCHMARK_TOO_MANY_TRIALS",
        /// The generator configuration was rejected.
        Generator => Generator { .. } => "BENCHMARK_INVALID_GENERATOR",
        /// Generating a trial graph failed.
        GenerationFailure => Generation { .. } => "BENCHMARK_GENERATION_FAILURE",
        /// Computing the MST for a trial failed.
        MstFailure => Mst { .. } => "BENCHMARK_MST_FAILURE",
    }
}

impl BenchmarkError {
    /// Retrieve the code of the stage error that aborted a trial, if any.
    #[must_use]
    pub const fn trial_code(&self) -> Option<&'static str> {
        match self {
            Self::Generation { source, .. } | Self::Generator { source } => {
                Some(source.code().as_str())
            }
            Self::Mst { source, .. } => Some(source.code().as_str()),
            _ => None,
        }
    }
}
