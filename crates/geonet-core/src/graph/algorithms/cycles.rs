use std::collections::{HashMap, VecDeque};

use super::path::has_path;
use super::search::NodeStatus;
use crate::graph::edge::Directed;
use crate::graph::traits::Graph;

/// Check if adding `from -> to` would create a cycle in a directed graph
///
/// A self-loop is a cycle. Otherwise adding the edge closes a cycle exactly
/// when a path `to -> from` already exists.
pub fn would_create_cycle<G>(graph: &G, from: &G::Node, to: &G::Node) -> bool
where
    G: Graph<Kind = Directed>,
{
    from == to || has_path(graph, to, from)
}

/// Detect if the graph contains any cycle
///
/// Iterative depth-first search: a node is Open while it sits on the current
/// path and Closed once all its descendants are done, so meeting an Open node
/// again means a back edge.
pub fn has_cycle<G>(graph: &G) -> bool
where
    G: Graph<Kind = Directed>,
{
    let mut status: HashMap<&G::Node, NodeStatus> = HashMap::new();

    for root in graph.nodes() {
        if status.contains_key(root) {
            continue;
        }
        status.insert(root, NodeStatus::Open);
        let mut stack = vec![(root, graph.neighbours(root))];

        while let Some((node, neighbours)) = stack.last_mut() {
            let node = *node;
            match neighbours.next() {
                Some(next) => match status.get(next) {
                    Some(NodeStatus::Open) => return true,
                    Some(_) => {}
                    None => {
                        status.insert(next, NodeStatus::Open);
                        stack.push((next, graph.neighbours(next)));
                    }
                },
                None => {
                    status.insert(node, NodeStatus::Closed);
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Order the nodes so that every edge points forward
///
/// Kahn's algorithm; nodes without remaining in-edges are emitted in node
/// iteration order. Returns `None` when the graph has a cycle.
pub fn topological_order<G>(graph: &G) -> Option<Vec<G::Node>>
where
    G: Graph<Kind = Directed>,
{
    let mut in_degree: HashMap<&G::Node, usize> = graph.nodes().map(|node| (node, 0)).collect();
    for node in graph.nodes() {
        for next in graph.neighbours(node) {
            *in_degree.entry(next).or_default() += 1;
        }
    }

    let mut ready: VecDeque<&G::Node> = graph
        .nodes()
        .filter(|node| in_degree.get(node).copied() == Some(0))
        .collect();
    let mut order = Vec::with_capacity(in_degree.len());

    while let Some(node) = ready.pop_front() {
        order.push(node.clone());
        for next in graph.neighbours(node) {
            if let Some(degree) = in_degree.get_mut(next) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(next);
                }
            }
        }
    }

    (order.len() == in_degree.len()).then_some(order)
}
