pub mod traits;
pub mod vertex;
pub mod labeled;
pub mod generators;

pub use traits::{infinity, EdgeWeight, Graph, MutableGraph, VertexOf};
pub use vertex::{Edge, Vertex, VertexId};
pub use labeled::LabeledGraph;
