use std::collections::HashSet;

use super::algorithms::{has_cycle, topological_order, would_create_cycle};
use super::core::DirectedGraph;
use super::edge::{Directed, Edge};
use super::traits::Graph;
use crate::error::GraphError;
use crate::result::GraphResult;

/// Directed graph that refuses edges closing a cycle
///
/// Wraps any directed [`Graph`] and forwards reads to it. Every insertion is
/// checked with a reachability search: `from -> to` is rejected when `to`
/// already reaches `from`, and self-loops are always rejected. Rejections
/// are not errors; insertion methods return `false`.
#[derive(Debug, Clone, Default)]
pub struct DirectedAcyclicGraph<G = DirectedGraph<u64>> {
    graph: G,
}

impl<G> DirectedAcyclicGraph<G>
where
    G: Graph<Kind = Directed>,
{
    pub fn new() -> Self
    where
        G: Default,
    {
        Self {
            graph: G::default(),
        }
    }

    /// Wrap an existing graph, failing if it already contains a cycle
    pub fn try_wrap(graph: G) -> GraphResult<Self> {
        if has_cycle(&graph) {
            return Err(GraphError::CycleDetected);
        }
        Ok(Self { graph })
    }

    /// Wrapped graph
    pub fn inner(&self) -> &G {
        &self.graph
    }

    /// Unwrap into the underlying graph
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Number of edges pointing at `node`
    pub fn in_degree(&self, node: &G::Node) -> usize {
        self.graph.inbound(node).count()
    }

    /// Number of edges leaving `node`
    pub fn out_degree(&self, node: &G::Node) -> usize {
        self.graph.neighbours(node).count()
    }

    /// Nodes without incoming edges, isolated nodes included
    ///
    /// Edge targets are collected in one pass up front; the nodes themselves
    /// are filtered lazily.
    pub fn root_nodes(&self) -> impl Iterator<Item = &G::Node> + '_ {
        let targets: HashSet<&G::Node> = self
            .graph
            .nodes()
            .flat_map(|node| self.graph.neighbours(node))
            .collect();
        self.graph
            .nodes()
            .filter(move |node| !targets.contains(node))
    }

    /// Nodes without outgoing edges
    pub fn leaf_nodes(&self) -> impl Iterator<Item = &G::Node> + '_ {
        self.graph
            .nodes()
            .filter(move |node| self.graph.neighbours(node).next().is_none())
    }

    /// Nodes ordered so that every edge points forward
    pub fn topological_order(&self) -> Vec<G::Node> {
        // Insertions keep the graph acyclic, so an order always exists
        topological_order(&self.graph).unwrap_or_default()
    }

    fn accepts(&self, from: &G::Node, to: &G::Node) -> bool {
        if self.graph.contains_edge(from, to) {
            return true;
        }
        if would_create_cycle(&self.graph, from, to) {
            tracing::debug!(
                nodes = self.graph.node_count(),
                "rejected edge that would close a cycle"
            );
            return false;
        }
        true
    }
}

impl<G> Graph for DirectedAcyclicGraph<G>
where
    G: Graph<Kind = Directed>,
{
    type Node = G::Node;
    type Kind = Directed;
    type Weight = G::Weight;

    type Nodes<'a>
        = G::Nodes<'a>
    where
        Self: 'a;

    type Neighbours<'a>
        = G::Neighbours<'a>
    where
        Self: 'a;

    fn add_node(&mut self, node: G::Node) -> bool {
        self.graph.add_node(node)
    }

    fn remove_node(&mut self, node: &G::Node) -> bool {
        self.graph.remove_node(node)
    }

    fn contains_node(&self, node: &G::Node) -> bool {
        self.graph.contains_node(node)
    }

    fn add_edge(&mut self, from: G::Node, to: G::Node) -> bool {
        self.accepts(&from, &to) && self.graph.add_edge(from, to)
    }

    fn insert_edge(&mut self, edge: Edge<G::Node, Directed, G::Weight>) -> bool {
        self.accepts(edge.from(), edge.to()) && self.graph.insert_edge(edge)
    }

    fn remove_edge(&mut self, from: &G::Node, to: &G::Node) -> bool {
        self.graph.remove_edge(from, to)
    }

    fn contains_edge(&self, from: &G::Node, to: &G::Node) -> bool {
        self.graph.contains_edge(from, to)
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.graph.nodes()
    }

    fn neighbours<'a>(&'a self, node: &G::Node) -> Self::Neighbours<'a> {
        self.graph.neighbours(node)
    }

    fn make_edge(&self, from: G::Node, to: G::Node) -> Edge<G::Node, Directed, G::Weight> {
        self.graph.make_edge(from, to)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn clear(&mut self) {
        self.graph.clear();
    }
}
