use log::warn;

use crate::graph::traits::{infinity, Graph, VertexOf};
use crate::graph::vertex::VertexId;
use crate::{Error, Result};

/// Read-only view over a finished single-source shortest path computation.
///
/// Implementors only expose the per-vertex distance and predecessor tables;
/// label lookups and path reconstruction are provided on top of them.
pub trait ShortestPaths {
    /// Graph the computation ran over
    type Store: Graph;

    /// The graph the results refer to
    fn graph(&self) -> &Self::Store;

    /// Id of the start vertex
    fn start_id(&self) -> VertexId;

    /// Final distance of a vertex, [`infinity`] if it was never reached
    fn distance_by_id(&self, id: VertexId) -> <Self::Store as Graph>::Weight;

    /// Previous vertex on the shortest path to `id`
    fn predecessor_by_id(&self, id: VertexId) -> Option<VertexId>;

    /// Distance from the start vertex to `label`.
    ///
    /// Unreached vertices report [`infinity`]. Labels that are not in the
    /// graph fail with [`Error::VertexNotFound`].
    fn distance_to(&self, label: &str) -> Result<<Self::Store as Graph>::Weight> {
        let id = self
            .graph()
            .vertex_id(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        Ok(self.distance_by_id(id))
    }

    /// True if `label` was reached from the start vertex
    fn is_reachable(&self, label: &str) -> Result<bool> {
        Ok(self.distance_to(label)? != infinity())
    }

    /// Shortest path from the start vertex to `label`, both ends included.
    fn path_to(&self, label: &str) -> Result<Vec<&VertexOf<Self::Store>>> {
        let graph = self.graph();
        let target = graph
            .vertex_id(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        if self.distance_by_id(target) == infinity() {
            return Err(Error::Unreachable(label.to_string()));
        }

        let start = self.start_id();
        let mut path = Vec::new();
        let mut current = target;

        // Build path in reverse order
        loop {
            let vertex = graph
                .vertex_by_id(current)
                .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
            path.push(vertex);
            if current == start {
                break;
            }

            // A chain longer than the graph can only be a cycle
            if path.len() > graph.slot_count() {
                warn!("Predecessor cycle while rebuilding path to {}", label);
                return Err(Error::Unreachable(label.to_string()));
            }

            match self.predecessor_by_id(current) {
                Some(pred) => current = pred,
                None => {
                    warn!("Predecessor chain to {} stops at {}", label, vertex.label());
                    return Err(Error::Unreachable(label.to_string()));
                }
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Labels along [`ShortestPaths::path_to`]
    fn path_labels_to(&self, label: &str) -> Result<Vec<&str>> {
        Ok(self
            .path_to(label)?
            .into_iter()
            .map(|vertex| vertex.label())
            .collect())
    }
}
