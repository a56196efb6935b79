use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::GraphError;
use crate::graph::traits::Graph;

/// Per-node state of a running search
///
/// A node only ever moves forward: Unknown -> Open -> Closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    #[default]
    Unknown,
    Open,
    Closed,
}

/// Hooks that give a search its meaning
///
/// The traversal engine owns the tri-state bookkeeping and the edge log;
/// implementors observe transitions and decide when the search is done.
pub trait SearchOutcome<N> {
    /// Called when `node` is discovered and moves to Open
    fn on_open(&mut self, _node: &N) {}

    /// Called once every neighbour of `node` has been considered
    fn on_close(&mut self, _node: &N) {}

    /// Called when the search crosses `from -> to` to discover `to`
    fn on_edge(&mut self, _from: &N, _to: &N) {}

    /// Early termination condition, checked after every discovery
    fn stop(&self) -> bool {
        false
    }
}

impl<N> SearchOutcome<N> for () {}

/// Frontier discipline of a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Queue based, discovers nodes in order of hop distance
    #[default]
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// Stack based
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            other => Err(GraphError::Config(format!(
                "unknown search strategy '{other}', expected bfs or dfs"
            ))),
        }
    }
}

/// State of one search: node statuses, traversed edges and the outcome
///
/// A fresh `Search` is created per query. Running it again from another start
/// node continues with the same bookkeeping, which is how whole-graph
/// traversals visit every component exactly once.
#[derive(Debug, Clone)]
pub struct Search<N, O> {
    status: HashMap<N, NodeStatus>,
    traversed: Vec<(N, N)>,
    outcome: O,
}

impl<N, O> Search<N, O>
where
    N: Clone + Eq + Hash,
    O: SearchOutcome<N>,
{
    /// Start a search with every node Unknown
    pub fn new(outcome: O) -> Self {
        Self {
            status: HashMap::new(),
            traversed: Vec::new(),
            outcome,
        }
    }

    /// Status of `node`; nodes never seen are Unknown
    pub fn status(&self, node: &N) -> NodeStatus {
        self.status.get(node).copied().unwrap_or_default()
    }

    /// Edges crossed to discover new nodes, in discovery order
    pub fn traversed(&self) -> &[(N, N)] {
        &self.traversed
    }

    /// Outcome collected so far
    pub fn outcome(&self) -> &O {
        &self.outcome
    }

    /// Mutable access to the outcome between runs
    pub fn outcome_mut(&mut self) -> &mut O {
        &mut self.outcome
    }

    /// Consume the search, keeping the outcome
    pub fn into_outcome(self) -> O {
        self.outcome
    }

    /// Consume the search into its outcome and traversed edges
    pub fn into_parts(self) -> (O, Vec<(N, N)>) {
        (self.outcome, self.traversed)
    }

    /// Whether the outcome asked the search to stop
    pub fn is_stopped(&self) -> bool {
        self.outcome.stop()
    }

    fn open(&mut self, node: &N) -> bool {
        if self.status(node) != NodeStatus::Unknown {
            return false;
        }
        self.status.insert(node.clone(), NodeStatus::Open);
        self.outcome.on_open(node);
        true
    }

    fn close(&mut self, node: &N) {
        if self.status(node) == NodeStatus::Open {
            self.status.insert(node.clone(), NodeStatus::Closed);
            self.outcome.on_close(node);
        }
    }

    fn discover(&mut self, from: &N, to: &N) {
        self.open(to);
        self.traversed.push((from.clone(), to.clone()));
        self.outcome.on_edge(from, to);
    }

    /// Search from `start` with the given frontier discipline
    ///
    /// `filter(current, candidate)` decides whether an Unknown neighbour may
    /// be discovered. Does nothing if `start` is not a node of `graph` or was
    /// already reached by an earlier run.
    pub fn run<G, F>(&mut self, graph: &G, start: &N, strategy: Strategy, mut filter: F)
    where
        G: Graph<Node = N>,
        F: FnMut(&N, &N) -> bool,
    {
        if !graph.contains_node(start) || !self.open(start) {
            return;
        }
        match strategy {
            Strategy::BreadthFirst => self.breadth_first(graph, start, &mut filter),
            Strategy::DepthFirst => self.depth_first(graph, start, &mut filter),
        }
    }

    fn breadth_first<G, F>(&mut self, graph: &G, start: &N, filter: &mut F)
    where
        G: Graph<Node = N>,
        F: FnMut(&N, &N) -> bool,
    {
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(current) = queue.pop_front() {
            if self.outcome.stop() {
                return;
            }
            for candidate in graph.neighbours(&current) {
                if self.status(candidate) != NodeStatus::Unknown || !filter(&current, candidate) {
                    continue;
                }
                self.discover(&current, candidate);
                if self.outcome.stop() {
                    return;
                }
                queue.push_back(candidate.clone());
            }
            self.close(&current);
        }
    }

    fn depth_first<G, F>(&mut self, graph: &G, start: &N, filter: &mut F)
    where
        G: Graph<Node = N>,
        F: FnMut(&N, &N) -> bool,
    {
        let mut stack = vec![start.clone()];

        while let Some(current) = stack.pop() {
            if self.outcome.stop() {
                return;
            }
            if self.status(&current) != NodeStatus::Open {
                continue;
            }
            for candidate in graph.neighbours(&current) {
                if self.status(candidate) != NodeStatus::Unknown || !filter(&current, candidate) {
                    continue;
                }
                self.discover(&current, candidate);
                if self.outcome.stop() {
                    return;
                }
                stack.push(candidate.clone());
            }
            self.close(&current);
        }
    }
}

/// Run a single search from `start` and return its final state
pub fn search<G, O, F>(
    graph: &G,
    start: &G::Node,
    strategy: Strategy,
    filter: F,
    outcome: O,
) -> Search<G::Node, O>
where
    G: Graph,
    O: SearchOutcome<G::Node>,
    F: FnMut(&G::Node, &G::Node) -> bool,
{
    let mut search = Search::new(outcome);
    search.run(graph, start, strategy, filter);
    search
}

pub fn breadth_first<G, O, F>(graph: &G, start: &G::Node, filter: F, outcome: O) -> Search<G::Node, O>
where
    G: Graph,
    O: SearchOutcome<G::Node>,
    F: FnMut(&G::Node, &G::Node) -> bool,
{
    search(graph, start, Strategy::BreadthFirst, filter, outcome)
}

pub fn depth_first<G, O, F>(graph: &G, start: &G::Node, filter: F, outcome: O) -> Search<G::Node, O>
where
    G: Graph,
    O: SearchOutcome<G::Node>,
    F: FnMut(&G::Node, &G::Node) -> bool,
{
    search(graph, start, Strategy::DepthFirst, filter, outcome)
}

/// Outcome recording nodes in the order they were opened
///
/// With a limit set, the search stops once that many nodes were visited.
#[derive(Debug, Clone, Default)]
pub struct VisitOrder<N> {
    visited: Vec<N>,
    limit: Option<usize>,
}

impl<N> VisitOrder<N> {
    pub fn new() -> Self {
        Self {
            visited: Vec::new(),
            limit: None,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            visited: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn visited(&self) -> &[N] {
        &self.visited
    }

    pub fn into_visited(self) -> Vec<N> {
        self.visited
    }
}

impl<N: Clone> SearchOutcome<N> for VisitOrder<N> {
    fn on_open(&mut self, node: &N) {
        self.visited.push(node.clone());
    }

    fn stop(&self) -> bool {
        self.limit.is_some_and(|limit| self.visited.len() >= limit)
    }
}

/// Result of a full traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<N> {
    /// Nodes in visit order, each exactly once
    pub order: Vec<N>,
    /// Edges crossed to discover nodes
    pub edges: Vec<(N, N)>,
}

/// Visit every node reachable from `start`
pub fn traverse<G: Graph>(graph: &G, start: &G::Node, strategy: Strategy) -> Traversal<G::Node> {
    let search = search(graph, start, strategy, |_, _| true, VisitOrder::new());
    let (outcome, edges) = search.into_parts();
    tracing::trace!(
        visited = outcome.visited().len(),
        strategy = %strategy,
        "traversal finished"
    );
    Traversal {
        order: outcome.into_visited(),
        edges,
    }
}

/// Visit every node of the graph, restarting in each unreached component
pub fn traverse_all<G: Graph>(graph: &G, strategy: Strategy) -> Traversal<G::Node> {
    let mut search = Search::new(VisitOrder::new());
    for node in graph.nodes() {
        search.run(graph, node, strategy, |_, _| true);
    }
    let (outcome, edges) = search.into_parts();
    Traversal {
        order: outcome.into_visited(),
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency::OrderedAdjacency;
    use crate::graph::core::{DirectedGraph, UndirectedGraph};
    use std::collections::HashSet;

    type Ordered = UndirectedGraph<u32, OrderedAdjacency<u32>>;

    fn tree() -> Ordered {
        // 1 - 2 - 4
        // |   |
        // 3   5
        let mut graph = Ordered::new();
        graph.add_edges([(1, 2), (1, 3), (2, 4), (2, 5)]);
        graph
    }

    #[derive(Default)]
    struct Transitions {
        opened: Vec<u32>,
        closed: Vec<u32>,
    }

    impl SearchOutcome<u32> for Transitions {
        fn on_open(&mut self, node: &u32) {
            self.opened.push(*node);
        }

        fn on_close(&mut self, node: &u32) {
            self.closed.push(*node);
        }
    }

    #[test]
    fn test_breadth_first_visits_by_distance() {
        let traversal = traverse(&tree(), &1, Strategy::BreadthFirst);
        assert_eq!(traversal.order, vec![1, 2, 3, 4, 5]);
        assert_eq!(traversal.edges, vec![(1, 2), (1, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn test_depth_first_goes_deep_before_wide() {
        let mut graph = Ordered::new();
        graph.add_edges([(1, 2), (1, 3), (3, 4), (2, 5)]);

        let depth = traverse(&graph, &1, Strategy::DepthFirst);
        let breadth = traverse(&graph, &1, Strategy::BreadthFirst);

        // 3 sits on top of the stack, so its subtree is expanded before 2's
        assert_eq!(depth.order, vec![1, 2, 3, 4, 5]);
        assert_eq!(breadth.order, vec![1, 2, 3, 5, 4]);
    }

    #[test]
    fn test_every_node_opened_and_closed_once() {
        let mut graph = UndirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);

        for strategy in [Strategy::BreadthFirst, Strategy::DepthFirst] {
            let search = search(&graph, &1, strategy, |_, _| true, Transitions::default());
            let outcome = search.outcome();

            let opened: HashSet<u32> = outcome.opened.iter().copied().collect();
            let closed: HashSet<u32> = outcome.closed.iter().copied().collect();
            assert_eq!(outcome.opened.len(), 4);
            assert_eq!(outcome.closed.len(), 4);
            assert_eq!(opened, closed);
            assert!(graph.nodes().all(|n| search.status(n) == NodeStatus::Closed));
        }
    }

    #[test]
    fn test_filter_blocks_discovery() {
        let graph = tree();
        let search = breadth_first(&graph, &1, |_, candidate| *candidate != 2, VisitOrder::new());

        assert_eq!(search.outcome().visited(), &[1, 3]);
        assert_eq!(search.status(&2), NodeStatus::Unknown);
        assert_eq!(search.status(&4), NodeStatus::Unknown);
    }

    #[test]
    fn test_stop_condition_ends_search() {
        let graph = tree();
        let search = breadth_first(&graph, &1, |_, _| true, VisitOrder::with_limit(2));

        assert!(search.is_stopped());
        assert_eq!(search.outcome().visited(), &[1, 2]);
        assert_eq!(search.traversed(), &[(1, 2)]);
    }

    #[test]
    fn test_directed_search_follows_direction() {
        let mut graph = DirectedGraph::<_>::new();
        graph.add_edges([(1, 2), (3, 1)]);

        let order = traverse(&graph, &1, Strategy::DepthFirst).order;
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_search_from_unknown_start_is_empty() {
        let traversal = traverse(&tree(), &99, Strategy::BreadthFirst);
        assert!(traversal.order.is_empty());
        assert!(traversal.edges.is_empty());
    }

    #[test]
    fn test_traverse_all_covers_every_component() {
        let mut graph = tree();
        graph.add_edge(7, 8);
        graph.add_node(9);

        let traversal = traverse_all(&graph, Strategy::BreadthFirst);
        assert_eq!(traversal.order, vec![1, 2, 3, 4, 5, 7, 8, 9]);
        assert_eq!(traversal.edges.len(), 5);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert!("dijkstra".parse::<Strategy>().is_err());
        assert_eq!(Strategy::DepthFirst.to_string(), "dfs");
    }
}
