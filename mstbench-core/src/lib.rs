//! mstbench core library.
//!
//! Generates connected random graphs of an exact size, computes minimum
//! spanning trees with a forced critical link using Kruskal's or Prim's
//! algorithm, and times both across a schedule of graph sizes.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod articulation;
mod benchmark;
mod error;
mod generator;
mod graph;
mod mst;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    articulation::{ArticulationPoints, find_articulation_points},
    benchmark::{
        Benchmark, BenchmarkBuilder, BenchmarkReport, DEFAULT_MAX_VERTICES, DEFAULT_SEED,
        DEFAULT_TRIALS_PER_STEP, DEFAULT_VERTEX_STEP, SizeResult,
    },
    error::{
        BenchmarkError, BenchmarkErrorCode, GenerateError, GenerateErrorCode, GraphError,
        GraphErrorCode, MstError, MstErrorCode,
    },
    generator::{DEFAULT_OVERSIZE_FACTOR, GeneratorConfig, GraphGenerator, LatticeKind},
    graph::{DenseAdjacency, Edge, EdgeId, Graph, VertexId},
    mst::{
        CRITICAL_LINK_WEIGHT, CriticalLink, DisjointSet, MAX_EDGE_WEIGHT, MIN_EDGE_WEIGHT,
        MstEdge, MstEngine, MstResult, MstStrategy, UnknownStrategy, assign_random_weights,
    },
};
