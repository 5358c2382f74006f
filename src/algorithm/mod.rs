pub mod traits;
pub mod dijkstra;

pub use traits::ShortestPaths;
pub use dijkstra::{Dijkstra, DijkstraOptions};
