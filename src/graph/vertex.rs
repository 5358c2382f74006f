use std::fmt;
use std::hash::{Hash, Hasher};

use crate::graph::traits::EdgeWeight;

/// Stable handle of a vertex inside one [`crate::LabeledGraph`].
///
/// Ids are never reused, even after the vertex is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Slot index of this vertex, below [`crate::Graph::slot_count`]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed, weighted edge owned by its origin vertex.
///
/// Endpoints are ids into the owning graph, not owned vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    origin: VertexId,
    destination: VertexId,
    weight: W,
}

impl<W: EdgeWeight> Edge<W> {
    pub fn new(origin: VertexId, destination: VertexId, weight: W) -> Self {
        Edge {
            origin,
            destination,
            weight,
        }
    }

    pub fn origin(&self) -> VertexId {
        self.origin
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// True if this edge runs from `origin` to `destination` (order matters)
    pub fn is_between(&self, origin: VertexId, destination: VertexId) -> bool {
        self.origin == origin && self.destination == destination
    }

    /// Returns the endpoint opposite to `current`, or `None` if `current`
    /// is not an endpoint of this edge
    pub fn neighbor(&self, current: VertexId) -> Option<VertexId> {
        if current == self.origin {
            Some(self.destination)
        } else if current == self.destination {
            Some(self.origin)
        } else {
            None
        }
    }
}

/// A labeled vertex with a payload and its outgoing edges.
///
/// Equality and hashing look at the label only, so a vertex stays a valid
/// set member or map key while its payload changes.
#[derive(Debug, Clone)]
pub struct Vertex<T, W> {
    id: VertexId,
    label: String,
    payload: T,
    edges: Vec<Edge<W>>,
}

impl<T, W: EdgeWeight> Vertex<T, W> {
    pub(crate) fn new(id: VertexId, label: String, payload: T) -> Self {
        Vertex {
            id,
            label,
            payload,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, target: VertexId) -> bool {
        self.edge_to(target).is_some()
    }

    /// The outgoing edge to `target`, if any
    pub fn edge_to(&self, target: VertexId) -> Option<&Edge<W>> {
        self.edges.iter().find(|edge| edge.is_between(self.id, target))
    }

    /// Appends an edge to `target` unless one already exists
    pub(crate) fn add_edge(&mut self, target: VertexId, weight: W) -> bool {
        if self.has_edge(target) {
            return false;
        }
        self.edges.push(Edge::new(self.id, target, weight));
        true
    }

    pub(crate) fn remove_edge(&mut self, target: VertexId) -> bool {
        let origin = self.id;
        match self.edges.iter().position(|edge| edge.is_between(origin, target)) {
            Some(index) => {
                self.edges.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T, W> PartialEq for Vertex<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T, W> Eq for Vertex<T, W> {}

impl<T, W> Hash for Vertex<T, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}
