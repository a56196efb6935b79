use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::search::{search, SearchOutcome, Strategy, VisitOrder};
use crate::graph::edge::Edge;
use crate::graph::traits::Graph;

/// Outcome looking for a goal node
///
/// Remembers, for every opened node, the node it was discovered from, and
/// stops as soon as the goal is opened.
#[derive(Debug, Clone)]
pub struct SearchPath<N> {
    goal: N,
    found: bool,
    predecessors: HashMap<N, N>,
}

impl<N: Clone + Eq + Hash> SearchPath<N> {
    /// Outcome looking for `goal`
    pub fn new(goal: N) -> Self {
        Self {
            goal,
            found: false,
            predecessors: HashMap::new(),
        }
    }

    /// Whether the goal has been reached
    pub fn found(&self) -> bool {
        self.found
    }

    /// Nodes from `start` to the goal, both included
    ///
    /// Empty if the goal was not reached.
    pub fn nodes_from(&self, start: &N) -> Vec<N> {
        if !self.found {
            return Vec::new();
        }
        let mut nodes = vec![self.goal.clone()];
        let mut current = &self.goal;
        while current != start {
            match self.predecessors.get(current) {
                Some(previous) => {
                    nodes.push(previous.clone());
                    current = previous;
                }
                None => return Vec::new(),
            }
        }
        nodes.reverse();
        nodes
    }
}

impl<N: Clone + Eq + Hash> SearchOutcome<N> for SearchPath<N> {
    fn on_open(&mut self, node: &N) {
        if *node == self.goal {
            self.found = true;
        }
    }

    fn on_edge(&mut self, from: &N, to: &N) {
        self.predecessors
            .entry(to.clone())
            .or_insert_with(|| from.clone());
    }

    fn stop(&self) -> bool {
        self.found
    }
}

/// Edges of a path from `start` to `goal`
///
/// Empty when either node is missing, when no path exists, or when
/// `start == goal`. Edges come from [`Graph::make_edge`], so they carry the
/// graph's kind and annotation.
pub fn find_path<G: Graph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    strategy: Strategy,
) -> Vec<Edge<G::Node, G::Kind, G::Weight>> {
    if start == goal || !graph.contains_node(goal) {
        return Vec::new();
    }
    let outcome = search(graph, start, strategy, |_, _| true, SearchPath::new(goal.clone()))
        .into_outcome();

    outcome
        .nodes_from(start)
        .windows(2)
        .map(|pair| graph.make_edge(pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Path with the fewest edges, found breadth-first
pub fn shortest_path<G: Graph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Vec<Edge<G::Node, G::Kind, G::Weight>> {
    find_path(graph, start, goal, Strategy::BreadthFirst)
}

/// Whether `goal` can be reached from `start`
///
/// A node present in the graph always reaches itself.
pub fn has_path<G: Graph>(graph: &G, start: &G::Node, goal: &G::Node) -> bool {
    if !graph.contains_node(start) || !graph.contains_node(goal) {
        return false;
    }
    if start == goal {
        return true;
    }
    search(
        graph,
        start,
        Strategy::DepthFirst,
        |_, _| true,
        SearchPath::new(goal.clone()),
    )
    .outcome()
    .found()
}

/// Every node reachable from `start`, `start` included
///
/// Empty when `start` is not a node of the graph.
pub fn reachable_from<G: Graph>(graph: &G, start: &G::Node) -> HashSet<G::Node> {
    search(graph, start, Strategy::BreadthFirst, |_, _| true, VisitOrder::new())
        .into_outcome()
        .into_visited()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::core::{DirectedGraph, UndirectedGraph};
    use crate::graph::edge::{Directed, Undirected};

    #[test]
    fn test_shortest_path() {
        let mut graph = UndirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (2, 3), (3, 4), (1, 5), (5, 4)]);

        let path = shortest_path(&graph, &1, &4);
        assert_eq!(path.len(), 2);
        assert_eq!(*path[0].from(), 1);
        assert_eq!(*path[1].to(), 4);
        assert_eq!(path, vec![Edge::<u32, Undirected>::new(1, 5), Edge::new(5, 4)]);
    }

    #[test]
    fn test_path_is_edge_connected() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (2, 3), (3, 4), (2, 5), (5, 6), (6, 4)]);

        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            let path = find_path(&graph, &1, &4, strategy);
            assert!(!path.is_empty());
            assert_eq!(*path[0].from(), 1);
            assert_eq!(*path[path.len() - 1].to(), 4);
            for pair in path.windows(2) {
                assert_eq!(pair[0].to(), pair[1].from());
            }
            assert!(path.iter().all(|edge| graph.contains_edge_value(edge)));
        }
    }

    #[test]
    fn test_no_path_is_empty() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (3, 2)]);

        assert!(find_path(&graph, &1, &3, Strategy::DepthFirst).is_empty());
        assert!(find_path(&graph, &2, &1, Strategy::BreadthFirst).is_empty());
        assert!(find_path(&graph, &1, &42, Strategy::BreadthFirst).is_empty());
        assert!(find_path(&graph, &42, &1, Strategy::BreadthFirst).is_empty());
    }

    #[test]
    fn test_path_to_self_is_empty() {
        let mut graph = UndirectedGraph::<_>::new();
        graph.add_edge(1, 2);

        assert!(shortest_path(&graph, &1, &1).is_empty());
        assert!(has_path(&graph, &1, &1));
    }

    #[test]
    fn test_has_path_on_cycle() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);

        assert!(has_path(&graph, &2, &1));
        assert!(has_path(&graph, &1, &4));
        assert!(!has_path(&graph, &4, &1));
        assert!(!has_path(&graph, &1, &9));
    }

    #[test]
    fn test_reachable_from() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (1, 3), (2, 4), (5, 1)]);

        let reachable = reachable_from(&graph, &1);
        assert_eq!(reachable.len(), 4);
        assert!(reachable.contains(&1));
        assert!(reachable.contains(&4));
        assert!(!reachable.contains(&5));
    }

    #[test]
    fn test_reachable_from_unknown_node() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        assert!(reachable_from(&graph, &1).is_empty());
    }

    #[test]
    fn test_path_edges_match_graph_kind() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (2, 3)]);

        let path = shortest_path(&graph, &1, &3);
        assert_eq!(path, vec![Edge::<u32, Directed>::new(1, 2), Edge::new(2, 3)]);
    }
}
