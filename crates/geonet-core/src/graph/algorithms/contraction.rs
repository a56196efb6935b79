use rayon::prelude::*;

use super::components::connected_components_by;
use crate::error::GraphError;
use crate::graph::traits::Graph;
use crate::result::GraphResult;

/// Contract every component under `relation` into a single node
///
/// Components are found breadth-first, following only edges for which
/// `relation(from, to)` holds. Each component is folded into one node with
/// `merge`; components are merged in parallel on a private pool of `workers`
/// threads (0 is treated as 1). The result is a fresh graph of the same type
/// holding one node per component, with an edge wherever the input had an
/// edge between two distinct components.
pub fn contract<G, R, M>(graph: &G, relation: R, merge: M, workers: usize) -> GraphResult<G>
where
    G: Graph + Default,
    G::Node: Send + Sync,
    R: FnMut(&G::Node, &G::Node) -> bool,
    M: Fn(&G::Node, &G::Node) -> G::Node + Sync,
{
    let components = connected_components_by(graph, relation);
    let labels = components.as_map();
    let workers = workers.max(1);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("geonet-merge-{index}"))
        .build()
        .map_err(|e| GraphError::Internal(format!("Failed to start merge workers: {e}")))?;

    let merged: Vec<G::Node> = pool
        .install(|| {
            components
                .components()
                .par_iter()
                .map(|nodes| fold_component(nodes, &merge))
                .collect::<Option<Vec<_>>>()
        })
        .ok_or_else(|| GraphError::Internal("Connected component without nodes".to_string()))?;

    let mut contracted = G::default();
    for node in &merged {
        contracted.add_node(node.clone());
    }

    let mut kept = 0usize;
    for edge in graph.edges() {
        let (Some(&from), Some(&to)) = (labels.get(edge.from()), labels.get(edge.to())) else {
            continue;
        };
        if from != to && contracted.add_edge(merged[from].clone(), merged[to].clone()) {
            kept += 1;
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        components = merged.len(),
        edges = kept,
        workers,
        "contracted graph"
    );

    Ok(contracted)
}

fn fold_component<N, M>(nodes: &[N], merge: &M) -> Option<N>
where
    N: Clone,
    M: Fn(&N, &N) -> N,
{
    let (first, rest) = nodes.split_first()?;
    Some(
        rest.iter()
            .fold(first.clone(), |merged, node| merge(&merged, node)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency::OrderedAdjacency;
    use crate::graph::core::{DirectedGraph, UndirectedGraph};
    use std::collections::HashSet;

    type Ordered = UndirectedGraph<u32, OrderedAdjacency<u32>>;

    fn close(a: &u32, b: &u32) -> bool {
        a.abs_diff(*b) <= 1
    }

    fn sample() -> Ordered {
        let mut graph = Ordered::new();
        graph.add_edges([(1, 2), (2, 3), (3, 10), (10, 11), (11, 20)]);
        graph.add_node(30);
        graph
    }

    #[test]
    fn test_contract_merges_components() {
        let contracted = contract(&sample(), close, |a, b| *a.min(b), 1).unwrap();

        let nodes: Vec<u32> = contracted.nodes().copied().collect();
        assert_eq!(nodes, vec![1, 10, 20, 30]);
        assert!(contracted.contains_edge(&1, &10));
        assert!(contracted.contains_edge(&10, &20));
        assert_eq!(contracted.edge_count(), 2);
    }

    #[test]
    fn test_no_contracted_edge_satisfies_relation() {
        let contracted = contract(&sample(), close, |a, b| a.max(b) - 1, 2).unwrap();

        for edge in contracted.edges() {
            assert!(!close(edge.from(), edge.to()), "edge {edge} still contractible");
        }
    }

    #[test]
    fn test_worker_count_does_not_change_result() {
        let graph = sample();
        let expected = contract(&graph, close, |a, b| *a.min(b), 1).unwrap();

        for workers in [0, 3, 8] {
            let contracted = contract(&graph, close, |a, b| *a.min(b), workers).unwrap();
            let nodes: HashSet<u32> = contracted.nodes().copied().collect();
            let expected_nodes: HashSet<u32> = expected.nodes().copied().collect();
            assert_eq!(nodes, expected_nodes);
            assert_eq!(contracted.edge_count(), expected.edge_count());
        }
    }

    #[test]
    fn test_contract_without_matches_keeps_graph() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1u32, 5u32), (5, 9)]);

        let contracted = contract(&graph, close, |a, _| *a, 1).unwrap();
        assert_eq!(contracted.node_count(), 3);
        assert!(contracted.contains_edge(&1, &5));
        assert!(contracted.contains_edge(&5, &9));
    }

    #[test]
    fn test_contract_empty_graph() {
        let graph: UndirectedGraph<u32> = UndirectedGraph::new();
        let contracted = contract(&graph, |_, _| true, |a, _| *a, 4).unwrap();
        assert_eq!(contracted.node_count(), 0);
    }
}
