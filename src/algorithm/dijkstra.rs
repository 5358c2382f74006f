use log::{debug, trace};
use num_traits::Zero;

use crate::algorithm::ShortestPaths;
use crate::data_structures::Frontier;
use crate::graph::traits::{infinity, saturating_sum, EdgeWeight, Graph, VertexOf};
use crate::graph::vertex::VertexId;
use crate::{Error, Result};

/// Settings for a [`Dijkstra`] run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraOptions<W> {
    /// Vertices farther than this are left unreached; `None` searches the
    /// whole graph
    pub max_distance: Option<W>,
}

impl<W: EdgeWeight> DijkstraOptions<W> {
    pub fn new() -> Self {
        DijkstraOptions { max_distance: None }
    }

    /// Only settle vertices whose distance is at most `limit`
    pub fn with_max_distance(mut self, limit: W) -> Self {
        self.max_distance = Some(limit);
        self
    }

    fn admits(&self, distance: W) -> bool {
        distance != infinity() && self.max_distance.map_or(true, |limit| distance <= limit)
    }
}

impl<W: EdgeWeight> Default for DijkstraOptions<W> {
    fn default() -> Self {
        DijkstraOptions::new()
    }
}

/// Dijkstra's label-setting shortest paths from one start vertex.
///
/// The whole computation runs inside [`Dijkstra::new`]; afterwards the
/// value only answers queries. It borrows the graph for its whole lifetime,
/// so the graph cannot change under it. To keep results while editing the
/// graph, build the engine over a `clone()` of it.
#[derive(Debug)]
pub struct Dijkstra<'g, G: Graph> {
    graph: &'g G,
    start: VertexId,
    start_label: String,
    options: DijkstraOptions<G::Weight>,

    /// Best known distance per vertex slot, `infinity()` if unreached
    distances: Vec<G::Weight>,

    /// Previous vertex on the shortest path per vertex slot
    predecessors: Vec<Option<VertexId>>,

    settled: Vec<bool>,

    /// Vertices in the order they were finalized, start first
    settle_order: Vec<VertexId>,
}

impl<'g, G: Graph> Dijkstra<'g, G> {
    /// Computes shortest paths from `start` to every vertex of `graph`
    pub fn new(graph: &'g G, start: &str) -> Result<Self> {
        Self::with_options(graph, start, DijkstraOptions::default())
    }

    /// Computes shortest paths from `start` using custom options
    pub fn with_options(
        graph: &'g G,
        start: &str,
        options: DijkstraOptions<G::Weight>,
    ) -> Result<Self> {
        let start_id = graph
            .vertex_id(start)
            .ok_or_else(|| Error::InvalidStartVertex(start.to_string()))?;

        let slots = graph.slot_count();
        let mut engine = Dijkstra {
            graph,
            start: start_id,
            start_label: start.to_string(),
            options,
            distances: vec![infinity(); slots],
            predecessors: vec![None; slots],
            settled: vec![false; slots],
            settle_order: Vec::with_capacity(graph.vertex_count()),
        };
        engine.process_graph();

        debug!(
            "Dijkstra from {}: settled {} of {} vertices",
            engine.start_label,
            engine.settle_order.len(),
            graph.vertex_count()
        );
        Ok(engine)
    }

    fn process_graph(&mut self) {
        let graph = self.graph;
        let start = self.start;
        let Some(origin) = graph.vertex_by_id(start) else {
            return;
        };

        self.distances[start.index()] = <G::Weight as Zero>::zero();

        // Seed the start vertex's neighbors directly from the edge weights
        let mut frontier = Frontier::with_capacity(origin.edge_count());
        for edge in origin.edges() {
            let Some(neighbor) = edge.neighbor(start) else {
                continue;
            };
            if neighbor == start || !self.options.admits(edge.weight()) {
                continue;
            }
            self.distances[neighbor.index()] = edge.weight();
            self.predecessors[neighbor.index()] = Some(start);
            frontier.push(neighbor, edge.weight());
        }
        self.settle(start);

        while let Some((current, distance)) = frontier.pop() {
            // Stale entry left behind by a later decrease
            if self.settled[current.index()] {
                continue;
            }
            let Some(vertex) = graph.vertex_by_id(current) else {
                continue;
            };

            for edge in vertex.edges() {
                let Some(neighbor) = edge.neighbor(current) else {
                    continue;
                };
                if self.settled[neighbor.index()] {
                    continue;
                }

                let candidate = saturating_sum(distance, edge.weight());
                if candidate < self.distances[neighbor.index()] && self.options.admits(candidate) {
                    trace!(
                        "Relax {} -> {}: {:?}",
                        vertex.label(),
                        neighbor,
                        candidate
                    );
                    self.distances[neighbor.index()] = candidate;
                    self.predecessors[neighbor.index()] = Some(current);
                    frontier.push(neighbor, candidate);
                }
            }

            self.settle(current);
            trace!("Settled {} at {:?}", vertex.label(), distance);
        }
    }

    fn settle(&mut self, id: VertexId) {
        self.settled[id.index()] = true;
        self.settle_order.push(id);
    }

    /// Label of the start vertex
    pub fn start(&self) -> &str {
        &self.start_label
    }

    pub fn options(&self) -> &DijkstraOptions<G::Weight> {
        &self.options
    }

    /// Number of vertices whose distance was finalized, start included
    pub fn settled_count(&self) -> usize {
        self.settle_order.len()
    }

    /// Reached vertices with their distances, in the order they were settled
    pub fn reachable(&self) -> impl Iterator<Item = (&'g VertexOf<G>, G::Weight)> + '_ {
        let graph = self.graph;
        self.settle_order.iter().filter_map(move |&id| {
            graph
                .vertex_by_id(id)
                .map(|vertex| (vertex, self.distances[id.index()]))
        })
    }

    /// Vertex preceding `label` on its shortest path. `None` for the start
    /// vertex and for unreached vertices.
    pub fn predecessor_of(&self, label: &str) -> Result<Option<&'g VertexOf<G>>> {
        let id = self
            .graph
            .vertex_id(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        Ok(self.predecessors[id.index()].and_then(|pred| self.graph.vertex_by_id(pred)))
    }
}

impl<'g, G: Graph> ShortestPaths for Dijkstra<'g, G> {
    type Store = G;

    fn graph(&self) -> &G {
        self.graph
    }

    fn start_id(&self) -> VertexId {
        self.start
    }

    fn distance_by_id(&self, id: VertexId) -> G::Weight {
        self.distances
            .get(id.index())
            .copied()
            .unwrap_or_else(infinity)
    }

    fn predecessor_by_id(&self, id: VertexId) -> Option<VertexId> {
        self.predecessors.get(id.index()).copied().flatten()
    }
}
