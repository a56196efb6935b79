use std::collections::HashMap;
use std::fmt;

use super::edge::Edge;
use super::traits::Graph;

/// Decorator attaching a weight to every edge of a graph
///
/// Weights given explicitly on insertion are stored; every other edge gets
/// its weight from `weight_fn(from, to)`. Stored weights are keyed by edge
/// value, so an undirected edge shares one weight between both orientations.
#[derive(Clone)]
pub struct Weighted<G: Graph, W, F> {
    graph: G,
    weights: HashMap<Edge<G::Node, G::Kind>, W>,
    weight_fn: F,
}

impl<G, W, F> Weighted<G, W, F>
where
    G: Graph,
    W: Clone,
    F: Fn(&G::Node, &G::Node) -> W,
{
    pub fn new(weight_fn: F) -> Self
    where
        G: Default,
    {
        Self::with_graph(G::default(), weight_fn)
    }

    /// Decorate an existing graph; its edges are weighted by `weight_fn`
    pub fn with_graph(graph: G, weight_fn: F) -> Self {
        Self {
            graph,
            weights: HashMap::new(),
            weight_fn,
        }
    }

    /// Undecorated graph
    pub fn inner(&self) -> &G {
        &self.graph
    }

    /// Unwrap into the undecorated graph, dropping the weights
    pub fn into_inner(self) -> G {
        self.graph
    }

    /// Weight of the edge `from -> to`, or `None` if there is no such edge
    pub fn weight(&self, from: &G::Node, to: &G::Node) -> Option<W> {
        if !self.graph.contains_edge(from, to) {
            return None;
        }
        Some(self.lookup(from, to))
    }

    /// Override the weight of an existing edge; returns false if the edge is missing
    pub fn set_weight(&mut self, from: &G::Node, to: &G::Node, weight: W) -> bool {
        if !self.graph.contains_edge(from, to) {
            return false;
        }
        self.weights
            .insert(Edge::new(from.clone(), to.clone()), weight);
        true
    }

    /// Add an edge carrying an explicit weight
    pub fn add_weighted_edge(&mut self, from: G::Node, to: G::Node, weight: W) -> bool {
        self.insert_edge(Edge::weighted(from, to, weight))
    }

    fn lookup(&self, from: &G::Node, to: &G::Node) -> W {
        self.weights
            .get(&Edge::new(from.clone(), to.clone()))
            .cloned()
            .unwrap_or_else(|| (self.weight_fn)(from, to))
    }
}

impl<G, W, F> Default for Weighted<G, W, F>
where
    G: Graph + Default,
    F: Default,
{
    fn default() -> Self {
        Self {
            graph: G::default(),
            weights: HashMap::new(),
            weight_fn: F::default(),
        }
    }
}

impl<G, W, F> fmt::Debug for Weighted<G, W, F>
where
    G: Graph + fmt::Debug,
    G::Node: fmt::Debug,
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weighted")
            .field("graph", &self.graph)
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}

impl<G, W, F> Graph for Weighted<G, W, F>
where
    G: Graph,
    W: Clone,
    F: Fn(&G::Node, &G::Node) -> W,
{
    type Node = G::Node;
    type Kind = G::Kind;
    type Weight = W;

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
        if !self.graph.remove_node(node) {
            return false;
        }
        self.weights.retain(|edge, _| !edge.involves(node));
        true
    }

    fn contains_node(&self, node: &G::Node) -> bool {
        self.graph.contains_node(node)
    }

    fn add_edge(&mut self, from: G::Node, to: G::Node) -> bool {
        self.graph.add_edge(from, to)
    }

    fn insert_edge(&mut self, edge: Edge<G::Node, G::Kind, W>) -> bool {
        let (from, to, weight) = edge.into_parts();
        if !self.graph.add_edge(from.clone(), to.clone()) {
            return false;
        }
        self.weights.insert(Edge::new(from, to), weight);
        true
    }

    fn remove_edge(&mut self, from: &G::Node, to: &G::Node) -> bool {
        if !self.graph.remove_edge(from, to) {
            return false;
        }
        self.weights.remove(&Edge::new(from.clone(), to.clone()));
        true
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

    fn make_edge(&self, from: G::Node, to: G::Node) -> Edge<G::Node, G::Kind, W> {
        let weight = self.lookup(&from, &to);
        Edge::weighted(from, to, weight)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.weights.clear();
    }
}
