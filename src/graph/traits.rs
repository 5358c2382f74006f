use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::graph::vertex::{Vertex, VertexId};
use crate::Result;

/// Edge weight and path distance type.
///
/// Only unsigned integers qualify, so a negative weight cannot be built.
pub trait EdgeWeight: PrimInt + Unsigned + Debug {}

impl<W> EdgeWeight for W where W: PrimInt + Unsigned + Debug {}

/// Distance reported for a vertex that was never reached
pub fn infinity<W: EdgeWeight>() -> W {
    W::max_value()
}

/// Adds two distances, clamping at [`infinity`]
pub fn saturating_sum<W: EdgeWeight>(a: W, b: W) -> W {
    a.checked_add(&b).unwrap_or_else(W::max_value)
}

/// Vertex type stored by graph `G`
pub type VertexOf<G> = Vertex<<G as Graph>::Payload, <G as Graph>::Weight>;

/// Read access to a directed graph with labeled vertices
pub trait Graph {
    /// Opaque value stored on each vertex
    type Payload;

    /// Weight type of every edge
    type Weight: EdgeWeight;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Upper bound (exclusive) of every `VertexId` ever issued by this graph
    fn slot_count(&self) -> usize;

    /// Returns true if a vertex with this label exists
    fn contains_vertex(&self, label: &str) -> bool;

    /// Returns true if there's a directed edge `from -> to`
    fn contains_edge(&self, from: &str, to: &str) -> bool;

    /// Labels of all vertices currently in the graph
    fn vertex_keys(&self) -> HashSet<&str>;

    /// Looks a vertex up by label
    fn get_vertex(&self, label: &str) -> Option<&Vertex<Self::Payload, Self::Weight>>;

    /// Looks a vertex up by its id; `None` once the vertex has been removed
    fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<Self::Payload, Self::Weight>>;

    /// Returns an iterator over all live vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex<Self::Payload, Self::Weight>> + '_>;

    /// Resolves a label to the id of its vertex
    fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.get_vertex(label).map(Vertex::id)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex under `label`; false if the label is already taken
    fn add_vertex(&mut self, payload: Self::Payload, label: impl Into<String>) -> bool;

    /// Removes a vertex together with every edge into or out of it
    fn remove_vertex(&mut self, label: &str) -> bool;

    /// Adds a directed edge between two existing vertices.
    ///
    /// Fails with [`crate::Error::VertexNotFound`] if either endpoint is
    /// missing, and returns `Ok(false)` if the edge already exists.
    fn add_edge(&mut self, from: &str, to: &str, weight: Self::Weight) -> Result<bool>;

    /// Removes the directed edge `from -> to`
    fn remove_edge(&mut self, from: &str, to: &str) -> bool;

    /// Adds a zero-weight directed edge
    fn add_edge_unweighted(&mut self, from: &str, to: &str) -> Result<bool> {
        self.add_edge(from, to, <Self::Weight as Zero>::zero())
    }
}
