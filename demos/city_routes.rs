use label_sssp::{Dijkstra, Graph, LabeledGraph, MutableGraph, ShortestPaths};

/// A place on the map and its grid position, for display only
#[derive(Debug, Clone)]
struct Place {
    name: &'static str,
    position: (i32, i32),
}

fn create_map() -> Result<LabeledGraph<Place>, label_sssp::Error> {
    let places = [
        ("A", "Old Town", (0, 0)),
        ("B", "Station", (3, 1)),
        ("C", "Market", (6, 0)),
        ("D", "Harbor", (9, 2)),
        ("E", "Lighthouse", (12, 5)),
        ("F", "Observatory", (4, 8)),
    ];

    let mut graph = LabeledGraph::new();
    for (label, name, position) in places {
        graph.add_vertex(Place { name, position }, label);
    }

    // Roads run both ways except the ferry and the hill road
    for (from, to, minutes) in [("A", "B", 5), ("B", "C", 4), ("C", "D", 5), ("A", "C", 10), ("B", "D", 11)] {
        graph.add_edge(from, to, minutes)?;
        graph.add_edge(to, from, minutes)?;
    }
    graph.add_edge("D", "E", 7)?;
    graph.add_edge("F", "A", 15)?;

    Ok(graph)
}

fn main() -> Result<(), label_sssp::Error> {
    env_logger::init();

    let graph = create_map()?;
    println!("Map has {} places and {} road segments", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new(&graph, "A")?;
    let origin = graph.get_vertex(dijkstra.start()).map(|v| v.payload().name).unwrap_or("?");
    println!("\nTravel times from {}:", origin);

    for vertex in graph.vertices() {
        let place = vertex.payload();
        match dijkstra.path_to(vertex.label()) {
            Ok(path) => {
                let route: Vec<&str> = path.iter().map(|v| v.payload().name).collect();
                println!(
                    "  {:<12} at {:?}: {:>3} min via {}",
                    place.name,
                    place.position,
                    dijkstra.distance_to(vertex.label())?,
                    route.join(" -> ")
                );
            }
            Err(err) => println!("  {:<12} at {:?}: {}", place.name, place.position, err),
        }
    }

    Ok(())
}
