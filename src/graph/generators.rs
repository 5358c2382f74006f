use crate::graph::{LabeledGraph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Label of the vertex at grid cell `(x, y)`
pub fn grid_label(x: usize, y: usize) -> String {
    format!("{}:{}", x, y)
}

/// Label of the `i`-th vertex in chain and random graphs
pub fn indexed_label(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a `width * height` grid with 4-connectivity in both directions.
///
/// Vertices are labeled by [`grid_label`] and carry their coordinates.
pub fn generate_grid(width: usize, height: usize, weight: u32) -> LabeledGraph<(usize, usize), u32> {
    let mut graph = LabeledGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y), grid_label(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let current = grid_label(x, y);
            let mut neighbors = Vec::with_capacity(4);
            if x > 0 {
                neighbors.push(grid_label(x - 1, y));
            }
            if x + 1 < width {
                neighbors.push(grid_label(x + 1, y));
            }
            if y > 0 {
                neighbors.push(grid_label(x, y - 1));
            }
            if y + 1 < height {
                neighbors.push(grid_label(x, y + 1));
            }

            for neighbor in neighbors {
                // Both endpoints were inserted above
                let _ = graph.add_edge(&current, &neighbor, weight);
            }
        }
    }

    graph
}

/// Generates a directed chain `v0 -> v1 -> ... -> v{n-1}` with equal weights
pub fn generate_chain(n: usize, weight: u32) -> LabeledGraph<usize, u32> {
    let mut graph = LabeledGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(i, indexed_label(i));
    }
    for i in 1..n {
        let _ = graph.add_edge(&indexed_label(i - 1), &indexed_label(i), weight);
    }
    graph
}

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn from `0..=max_weight`. Self-loops and duplicate edges
/// are skipped, so the edge count may fall a little short. The same `seed`
/// always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u32, seed: u64) -> LabeledGraph<usize, u32> {
    let mut graph = LabeledGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(i, indexed_label(i));
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight);
            let _ = graph.add_edge(&indexed_label(u), &indexed_label(v), weight);
        }
    }

    graph
}
