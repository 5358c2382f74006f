use crate::graph::traits::{EdgeWeight, Graph, MutableGraph};
use crate::graph::vertex::{Vertex, VertexId};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};

/// A directed graph whose vertices are addressed by unique string labels.
///
/// Vertices live in an arena of slots. Removing a vertex empties its slot
/// instead of shifting the others, so every [`VertexId`] held by an edge
/// keeps pointing at the same vertex.
#[derive(Debug, Clone)]
pub struct LabeledGraph<T, W = u32> {
    /// Vertex slots indexed by `VertexId`; `None` marks a removed vertex
    slots: Vec<Option<Vertex<T, W>>>,

    /// Label -> slot of the live vertex carrying it
    index: HashMap<String, VertexId>,
}

impl<T, W: EdgeWeight> LabeledGraph<T, W> {
    /// Creates a new empty graph
    pub fn new() -> Self {
        LabeledGraph {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        LabeledGraph {
            slots: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph holding the given `(payload, label)` vertices and no
    /// edges. Later duplicates of a label are ignored.
    pub fn from_vertices<I, L>(vertices: I) -> Self
    where
        I: IntoIterator<Item = (T, L)>,
        L: Into<String>,
    {
        let mut graph = LabeledGraph::new();
        for (payload, label) in vertices {
            graph.add_vertex(payload, label);
        }
        graph
    }

    /// Mutable access to a vertex payload. Labels and edges stay read-only.
    pub fn payload_mut(&mut self, label: &str) -> Option<&mut T> {
        let id = *self.index.get(label)?;
        self.slot_mut(id).map(Vertex::payload_mut)
    }

    /// Weight of the edge `from -> to`, if present
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<W> {
        let target = *self.index.get(to)?;
        self.get_vertex(from)?.edge_to(target).map(|edge| edge.weight())
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T, W>> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }
}

impl<T, W: EdgeWeight> Default for LabeledGraph<T, W> {
    fn default() -> Self {
        LabeledGraph::new()
    }
}

impl<T, W: EdgeWeight> Graph for LabeledGraph<T, W> {
    type Payload = T;
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.index.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices().map(Vertex::edge_count).sum()
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.get_vertex(from), self.index.get(to)) {
            (Some(origin), Some(&target)) => origin.has_edge(target),
            _ => false,
        }
    }

    fn vertex_keys(&self) -> HashSet<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    fn get_vertex(&self, label: &str) -> Option<&Vertex<T, W>> {
        self.index.get(label).and_then(|&id| self.vertex_by_id(id))
    }

    fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex<T, W>> + '_> {
        Box::new(self.slots.iter().filter_map(Option::as_ref))
    }

    fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }
}

impl<T, W: EdgeWeight> MutableGraph for LabeledGraph<T, W> {
    fn add_vertex(&mut self, payload: T, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.index.contains_key(&label) {
            return false;
        }

        let id = VertexId::new(self.slots.len());
        self.index.insert(label.clone(), id);
        self.slots.push(Some(Vertex::new(id, label, payload)));
        true
    }

    fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(id) = self.index.remove(label) else {
            return false;
        };

        // Drop every incoming edge; outgoing ones go with the vertex
        for vertex in self.slots.iter_mut().flatten() {
            vertex.remove_edge(id);
        }
        self.slots[id.index()] = None;
        true
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<bool> {
        let origin = *self
            .index
            .get(from)
            .ok_or_else(|| Error::VertexNotFound(from.to_string()))?;
        let target = *self
            .index
            .get(to)
            .ok_or_else(|| Error::VertexNotFound(to.to_string()))?;

        Ok(self
            .slot_mut(origin)
            .map_or(false, |vertex| vertex.add_edge(target, weight)))
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(&origin), Some(&target)) = (self.index.get(from), self.index.get(to)) else {
            return false;
        };

        self.slot_mut(origin)
            .map_or(false, |vertex| vertex.remove_edge(target))
    }
}
