use label_sssp::graph::generators::{generate_chain, generate_grid, generate_random, grid_label, indexed_label};
use label_sssp::{infinity, Dijkstra, DijkstraOptions, Error, Graph, LabeledGraph, MutableGraph, ShortestPaths};
use std::collections::HashMap;

// Graph from the road-map scenario: A->B(5), A->C(10), B->C(4), C->D(5), B->D(11)
fn create_road_map() -> LabeledGraph<()> {
    let mut graph = LabeledGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_vertex((), label);
    }
    graph.add_edge("A", "B", 5).unwrap();
    graph.add_edge("A", "C", 10).unwrap();
    graph.add_edge("B", "C", 4).unwrap();
    graph.add_edge("C", "D", 5).unwrap();
    graph.add_edge("B", "D", 11).unwrap();
    graph
}

// Cheapest simple-path cost from `start` to every vertex, by exhaustive search
fn brute_force_distances(graph: &LabeledGraph<usize>, start: &str) -> HashMap<String, u32> {
    fn walk(
        graph: &LabeledGraph<usize>,
        label: &str,
        cost: u32,
        on_path: &mut Vec<String>,
        best: &mut HashMap<String, u32>,
    ) {
        let entry = best.entry(label.to_string()).or_insert(u32::MAX);
        if cost < *entry {
            *entry = cost;
        }

        let vertex = graph.get_vertex(label).unwrap();
        for edge in vertex.edges() {
            let next = graph.vertex_by_id(edge.destination()).unwrap().label();
            if on_path.iter().any(|seen| seen == next) {
                continue;
            }
            on_path.push(next.to_string());
            walk(graph, next, cost + edge.weight(), on_path, best);
            on_path.pop();
        }
    }

    let mut best = HashMap::new();
    let mut on_path = vec![start.to_string()];
    walk(graph, start, 0, &mut on_path, &mut best);
    best
}

fn path_weight<G: Graph<Weight = u32>>(graph: &G, labels: &[&str]) -> u32 {
    labels
        .windows(2)
        .map(|pair| {
            let target = graph.vertex_id(pair[1]).unwrap();
            graph.get_vertex(pair[0]).unwrap().edge_to(target).unwrap().weight()
        })
        .sum()
}

#[test]
fn test_road_map_distances_and_path() {
    let graph = create_road_map();
    let dijkstra = Dijkstra::new(&graph, "A").unwrap();

    assert_eq!(dijkstra.distance_to("A"), Ok(0));
    assert_eq!(dijkstra.distance_to("B"), Ok(5));
    assert_eq!(dijkstra.distance_to("C"), Ok(9));
    assert_eq!(dijkstra.distance_to("D"), Ok(14));

    assert_eq!(dijkstra.path_labels_to("D").unwrap(), vec!["A", "B", "C", "D"]);
    assert_eq!(dijkstra.path_labels_to("A").unwrap(), vec!["A"]);

    let path = dijkstra.path_to("D").unwrap();
    assert_eq!(path.first().map(|v| v.label()), Some("A"));
    assert_eq!(path.last().map(|v| v.label()), Some("D"));
    assert_eq!(dijkstra.predecessor_of("D").unwrap().map(|v| v.label()), Some("C"));
    assert!(dijkstra.predecessor_of("A").unwrap().is_none());
}

#[test]
fn test_invalid_start_vertex() {
    let graph = create_road_map();
    let before = graph.edge_count();

    let err = Dijkstra::new(&graph, "Z").unwrap_err();
    assert_eq!(err, Error::InvalidStartVertex("Z".to_string()));
    assert_eq!(graph.edge_count(), before);
    assert_eq!(graph.vertex_count(), 4);
}

#[test]
fn test_unknown_label_queries() {
    let graph = create_road_map();
    let dijkstra = Dijkstra::new(&graph, "A").unwrap();

    assert_eq!(dijkstra.distance_to("Q"), Err(Error::VertexNotFound("Q".to_string())));
    assert_eq!(dijkstra.path_to("Q").unwrap_err(), Error::VertexNotFound("Q".to_string()));
}

#[test]
fn test_unreachable_vertex() {
    let mut graph = create_road_map();
    graph.add_vertex((), "Island");
    let dijkstra = Dijkstra::new(&graph, "B").unwrap();

    assert_eq!(dijkstra.distance_to("Island"), Ok(infinity::<u32>()));
    assert_eq!(dijkstra.distance_to("A"), Ok(u32::MAX));
    assert_eq!(dijkstra.is_reachable("A"), Ok(false));
    assert_eq!(dijkstra.path_to("A").unwrap_err(), Error::Unreachable("A".to_string()));
    assert_eq!(dijkstra.path_to("Island").unwrap_err(), Error::Unreachable("Island".to_string()));
    assert!(dijkstra.predecessor_of("Island").unwrap().is_none());
    assert_eq!(dijkstra.settled_count(), 3);
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = create_road_map();
    graph.add_edge_unweighted("D", "A").unwrap();
    graph.add_vertex((), "E");
    graph.add_edge_unweighted("D", "E").unwrap();

    let dijkstra = Dijkstra::new(&graph, "C").unwrap();
    assert_eq!(dijkstra.distance_to("E"), Ok(5));
    assert_eq!(dijkstra.distance_to("A"), Ok(5));
    assert_eq!(dijkstra.distance_to("B"), Ok(10));
    assert_eq!(dijkstra.path_labels_to("B").unwrap(), vec!["C", "D", "A", "B"]);
}

#[test]
fn test_self_loop_on_start_keeps_zero_distance() {
    let mut graph = create_road_map();
    graph.add_edge("A", "A", 3).unwrap();

    let dijkstra = Dijkstra::new(&graph, "A").unwrap();
    assert_eq!(dijkstra.distance_to("A"), Ok(0));
    assert_eq!(dijkstra.distance_to("D"), Ok(14));
}

#[test]
fn test_seeded_neighbor_improved_later() {
    // The direct edge seeds C at 10, the detour through B beats it
    let graph = create_road_map();
    let dijkstra = Dijkstra::new(&graph, "A").unwrap();
    assert_eq!(dijkstra.predecessor_of("C").unwrap().map(|v| v.label()), Some("B"));
}

#[test]
fn test_max_distance_limits_search() {
    let graph = create_road_map();
    let options = DijkstraOptions::default().with_max_distance(9);
    let dijkstra = Dijkstra::with_options(&graph, "A", options).unwrap();

    assert_eq!(dijkstra.distance_to("C"), Ok(9));
    assert_eq!(dijkstra.distance_to("D"), Ok(infinity()));
    assert_eq!(dijkstra.path_to("D").unwrap_err(), Error::Unreachable("D".to_string()));
    assert_eq!(dijkstra.options().max_distance, Some(9));

    let reached: Vec<&str> = dijkstra.reachable().map(|(v, _)| v.label()).collect();
    assert_eq!(reached, vec!["A", "B", "C"]);
}

#[test]
fn test_reachable_in_settle_order() {
    let graph = create_road_map();
    let dijkstra = Dijkstra::new(&graph, "A").unwrap();

    let reached: Vec<(&str, u32)> = dijkstra.reachable().map(|(v, d)| (v.label(), d)).collect();
    assert_eq!(reached, vec![("A", 0), ("B", 5), ("C", 9), ("D", 14)]);
    assert_eq!(dijkstra.start(), "A");
}

#[test]
fn test_engine_over_snapshot_survives_mutation() {
    let mut graph = create_road_map();
    let snapshot = graph.clone();
    let dijkstra = Dijkstra::new(&snapshot, "A").unwrap();

    graph.remove_vertex("C");
    assert_eq!(dijkstra.distance_to("D"), Ok(14));

    let fresh = Dijkstra::new(&graph, "A").unwrap();
    assert_eq!(fresh.distance_to("D"), Ok(16));
    assert_eq!(fresh.distance_to("C"), Err(Error::VertexNotFound("C".to_string())));
}

#[test]
fn test_unit_weight_distance_equals_hops() {
    let graph = generate_grid(6, 5, 1);
    let start = grid_label(0, 0);
    let dijkstra = Dijkstra::new(&graph, &start).unwrap();

    for vertex in graph.vertices() {
        let (x, y) = *vertex.payload();
        let distance = dijkstra.distance_to(vertex.label()).unwrap();
        assert_eq!(distance as usize, x + y);

        let path = dijkstra.path_to(vertex.label()).unwrap();
        assert_eq!(path.len() - 1, distance as usize);
        assert_eq!(path[0].label(), start);
        assert_eq!(path[path.len() - 1], vertex);
    }
}

#[test]
fn test_chain_path() {
    let graph = generate_chain(10, 3);
    let dijkstra = Dijkstra::new(&graph, &indexed_label(2)).unwrap();

    assert_eq!(dijkstra.distance_to(&indexed_label(9)), Ok(21));
    assert_eq!(dijkstra.path_to(&indexed_label(9)).unwrap().len(), 8);
    assert_eq!(dijkstra.is_reachable(&indexed_label(0)), Ok(false));
}

#[test]
fn test_matches_brute_force_on_random_graphs() {
    for seed in 0..25 {
        let graph = generate_random(7, 2.5, 9, seed);
        let start = indexed_label(0);
        let dijkstra = Dijkstra::new(&graph, &start).unwrap();
        let expected = brute_force_distances(&graph, &start);

        for vertex in graph.vertices() {
            let label = vertex.label();
            let distance = dijkstra.distance_to(label).unwrap();
            match expected.get(label) {
                Some(&best) => {
                    assert_eq!(distance, best, "seed {} vertex {}", seed, label);
                    let path = dijkstra.path_labels_to(label).unwrap();
                    assert_eq!(path[0], start);
                    assert_eq!(*path.last().unwrap(), label);
                    assert_eq!(path_weight(&graph, &path), distance);
                }
                None => {
                    assert_eq!(distance, infinity::<u32>(), "seed {} vertex {}", seed, label);
                    assert!(dijkstra.path_to(label).is_err());
                }
            }
        }
    }
}

#[test]
fn test_paths_use_existing_edges_on_larger_graph() {
    let graph = generate_random(300, 4.0, 50, 42);
    let dijkstra = Dijkstra::new(&graph, &indexed_label(0)).unwrap();

    for (vertex, distance) in dijkstra.reachable() {
        let path = dijkstra.path_labels_to(vertex.label()).unwrap();
        for pair in path.windows(2) {
            assert!(graph.contains_edge(pair[0], pair[1]), "Path should only use existing edges");
        }
        assert_eq!(path_weight(&graph, &path), distance);
    }
}
