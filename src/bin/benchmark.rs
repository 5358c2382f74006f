use std::time::{Duration, Instant};
use label_sssp::graph::generators::{generate_random, indexed_label};
use label_sssp::{Dijkstra, Graph, LabeledGraph};
use log::info;

// Builds the engine once and reports how many vertices it reached
fn benchmark_engine(graph: &LabeledGraph<usize>, start: &str) -> Result<Duration, label_sssp::Error> {
    let begin = Instant::now();
    let dijkstra = Dijkstra::new(graph, start)?;
    let duration = begin.elapsed();

    info!(
        "Reached {} of {} vertices in {:?}",
        dijkstra.settled_count(),
        graph.vertex_count(),
        duration
    );
    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;
    let max_weight = 100;

    info!("Benchmark: labeled Dijkstra, edge factor {}", edge_factor);

    let mut results = Vec::new();
    for &size in &graph_sizes {
        info!("Generating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, max_weight, size as u64);
        info!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let duration = benchmark_engine(&graph, &indexed_label(0))?;
        results.push((size, graph.edge_count(), duration));
    }

    println!("{:<10} | {:<10} | {:<12}", "Vertices", "Edges", "Time (ms)");
    println!("----------------------------------------");
    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<12.2}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
