//! Label SSSP - single-source shortest paths over labeled directed graphs
//!
//! Vertices are identified by unique string labels and carry an arbitrary
//! payload. Edges are directed and carry non-negative integer weights.
//!
//! The [`Dijkstra`] engine runs once, at construction, over a borrowed
//! [`LabeledGraph`] and then answers distance and path queries for any
//! destination label.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, DijkstraOptions},
    ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::labeled::LabeledGraph;
pub use graph::traits::{infinity, EdgeWeight, Graph, MutableGraph};
pub use graph::vertex::{Edge, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Start vertex not found in graph: {0}")]
    InvalidStartVertex(String),

    #[error("Vertex does not exist: {0}")]
    VertexNotFound(String),

    #[error("Vertex is not reachable from the start vertex: {0}")]
    Unreachable(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
