use std::collections::{HashMap, HashSet};

use geonet_core::graph::algorithms::*;
use geonet_core::graph::*;

/// Deterministic edge soup so failures are reproducible
fn pseudo_random_pairs(count: usize, nodes: u32, mut seed: u64) -> Vec<(u32, u32)> {
    let mut next = move || {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((seed >> 33) % u64::from(nodes)) as u32
    };
    (0..count).map(|_| (next(), next())).collect()
}

#[test]
fn test_dag_stays_acyclic_after_every_insertion() {
    for seed in [1, 7, 42, 1234] {
        let mut dag = GraphFactory::dag();
        for (from, to) in pseudo_random_pairs(200, 30, seed) {
            let accepted = dag.add_edge(from, to);
            assert!(!has_cycle(dag.inner()), "cycle after inserting {from} -> {to}");
            if accepted {
                assert!(dag.contains_edge(&from, &to));
                assert_ne!(from, to);
            }
        }
        assert!(topological_order(dag.inner()).is_some());
    }
}

#[test]
fn test_dag_rejects_exactly_the_cycle_closing_edges() {
    let mut dag = GraphFactory::dag();
    let mut plain = GraphFactory::directed();

    for (from, to) in pseudo_random_pairs(150, 20, 99) {
        let closes_cycle = from == to || has_path(&plain, &to, &from);
        let accepted = dag.add_edge(from, to);
        if closes_cycle {
            assert!(!accepted, "accepted {from} -> {to}");
        } else {
            assert_eq!(accepted, plain.add_edge(from, to));
        }
    }
    assert_eq!(dag.edge_count(), plain.edge_count());
}

#[test]
fn test_dag_scenario() {
    let mut dag = GraphFactory::dag();
    for (from, to) in [(1, 2), (2, 3), (2, 4), (3, 4)] {
        assert!(dag.add_edge(from, to));
    }
    assert!(!dag.add_edge(4, 1));
    assert!(dag.add_edge(4, 5));
    dag.add_node(6);

    assert_eq!(dag.in_degree(&1), 0);
    assert_eq!(dag.in_degree(&4), 2);
    assert_eq!(dag.out_degree(&2), 2);

    let roots: HashSet<i32> = dag.root_nodes().copied().collect();
    assert_eq!(roots, HashSet::from([1, 6]));
}

#[test]
fn test_traversal_visits_each_reachable_node_once() {
    let mut graph = GraphFactory::undirected();
    graph.add_edges(pseudo_random_pairs(120, 40, 5));

    for start in [0u32, 3, 17] {
        if !graph.contains_node(&start) {
            continue;
        }
        let reachable = reachable_from(&graph, &start);
        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            let traversal = traverse(&graph, &start, strategy);
            let unique: HashSet<u32> = traversal.order.iter().copied().collect();

            assert_eq!(unique.len(), traversal.order.len());
            assert_eq!(unique, reachable);
            assert_eq!(traversal.edges.len(), traversal.order.len() - 1);
        }
    }
}

#[test]
fn test_paths_are_connected_and_empty_only_without_path() {
    let mut graph = GraphFactory::directed();
    graph.add_edges(pseudo_random_pairs(60, 25, 3));
    let nodes: Vec<u32> = graph.nodes().copied().collect();

    for start in nodes.iter().take(8) {
        for goal in nodes.iter().rev().take(8) {
            let path = find_path(&graph, start, goal, Strategy::BreadthFirst);
            if start == goal {
                assert!(path.is_empty());
                continue;
            }
            assert_eq!(path.is_empty(), !has_path(&graph, start, goal));
            if let (Some(first), Some(last)) = (path.first(), path.last()) {
                assert_eq!(first.from(), start);
                assert_eq!(last.to(), goal);
            }
            for pair in path.windows(2) {
                assert_eq!(pair[0].to(), pair[1].from());
            }
            assert!(path.iter().all(|edge| graph.contains_edge_value(edge)));
        }
    }
}

#[test]
fn test_shortest_path_is_never_longer_than_any_path() {
    let mut graph = GraphFactory::undirected();
    graph.add_edges(pseudo_random_pairs(80, 30, 11));
    let nodes: Vec<u32> = graph.nodes().copied().collect();

    for goal in nodes.iter().take(10) {
        let start = &nodes[0];
        let shortest = shortest_path(&graph, start, goal);
        let any = find_path(&graph, start, goal, Strategy::DepthFirst);
        assert!(shortest.len() <= any.len());
    }
}

#[test]
fn test_components_partition_and_cover() {
    let mut graph = GraphFactory::undirected();
    graph.add_edges(pseudo_random_pairs(30, 50, 8));
    graph.add_nodes(50..55);

    let components = connected_components(&graph);
    let map = components.as_map();
    assert_eq!(map.len(), graph.node_count());

    for edge in graph.edges() {
        assert_eq!(map[edge.from()], map[edge.to()]);
    }
    let total: usize = components.components().iter().map(Vec::len).sum();
    assert_eq!(total, graph.node_count());
}

#[test]
fn test_contraction_leaves_no_contractible_edge() {
    let mut graph =
        Weighted::<UndirectedGraph<u32>, u32, _>::new(|a: &u32, b: &u32| a.abs_diff(*b));
    graph.add_edges(pseudo_random_pairs(100, 60, 21));
    let related = |a: &u32, b: &u32| a / 10 == b / 10;

    let contracted = contract(graph.inner(), related, |a, b| *a.min(b), 4).unwrap();

    for edge in contracted.edges() {
        assert!(!related(edge.from(), edge.to()));
    }
    let components = connected_components_by(graph.inner(), related);
    assert_eq!(contracted.node_count(), components.len());
}

#[test]
fn test_degree_centrality_matches_neighbour_counts() {
    let mut graph = GraphFactory::undirected();
    graph.add_edges([("A", "B"), ("B", "C")]);

    let scores: HashMap<&str, usize> = DegreeCentrality
        .scores(&graph)
        .map(|(node, score)| (*node, score))
        .collect();
    assert_eq!(scores, HashMap::from([("A", 1), ("B", 2), ("C", 1)]));
}

#[test]
fn test_container_choice_is_invisible() {
    let pairs = pseudo_random_pairs(90, 35, 77);
    let mut hashed = GraphFactory::directed();
    let mut fast = GraphFactory::directed_with(FastAdjacencyMap::default());
    let mut ordered = GraphFactory::directed_with(OrderedAdjacency::new());

    hashed.add_edges(pairs.iter().copied());
    fast.add_edges(pairs.iter().copied());
    ordered.add_edges(pairs.iter().copied());

    let from_hashed: HashSet<Edge<u32, Directed>> = hashed.edges().collect();
    let from_fast: HashSet<Edge<u32, Directed>> = fast.edges().collect();
    let from_ordered: HashSet<Edge<u32, Directed>> = ordered.edges().collect();
    assert_eq!(from_hashed, from_fast);
    assert_eq!(from_hashed, from_ordered);
    assert_eq!(
        topological_order(&hashed).is_some(),
        topological_order(&ordered).is_some()
    );
}
