use std::collections::HashSet;
use std::hash::Hash;

use super::edge::{Edge, EdgeKind};

/// Minimal capability set shared by graphs and graph decorators
///
/// Algorithms, the DAG decorator and the weighted decorator are written
/// against this trait, so any conforming implementation can be substituted.
/// Duplicate insertions and queries about unknown nodes are not errors: they
/// surface as `false` or as empty iterators.
pub trait Graph {
    type Node: Clone + Eq + Hash;
    type Kind: EdgeKind;
    /// Annotation carried by edges produced by [`Graph::make_edge`]
    type Weight;

    type Nodes<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    type Neighbours<'a>: Iterator<Item = &'a Self::Node>
    where
        Self: 'a;

    /// Add a node; returns false if it was already present
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Remove a node and every edge incident to it
    fn remove_node(&mut self, node: &Self::Node) -> bool;

    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Add an edge, implicitly adding missing endpoints
    ///
    /// Returns whether the edge was newly added.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node) -> bool;

    /// Add an edge value, keeping its annotation where the graph stores one
    fn insert_edge(&mut self, edge: Edge<Self::Node, Self::Kind, Self::Weight>) -> bool;

    fn remove_edge(&mut self, from: &Self::Node, to: &Self::Node) -> bool;

    fn contains_edge(&self, from: &Self::Node, to: &Self::Node) -> bool;

    /// Fresh iterator over the current node set
    fn nodes(&self) -> Self::Nodes<'_>;

    /// Out-neighbours for directed graphs, neighbours otherwise
    fn neighbours<'a>(&'a self, node: &Self::Node) -> Self::Neighbours<'a>;

    /// Build an edge value matching this graph's kind without inserting it
    fn make_edge(
        &self,
        from: Self::Node,
        to: Self::Node,
    ) -> Edge<Self::Node, Self::Kind, Self::Weight>;

    fn node_count(&self) -> usize;

    /// Remove all nodes and edges
    fn clear(&mut self);

    fn is_directed() -> bool
    where
        Self: Sized,
    {
        <Self::Kind as EdgeKind>::DIRECTED
    }

    /// Add nodes one by one; returns how many were new
    fn add_nodes<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = Self::Node>,
        Self: Sized,
    {
        nodes
            .into_iter()
            .fold(0, |added, node| added + usize::from(self.add_node(node)))
    }

    /// Add edges one by one; each insertion is independent
    ///
    /// Returns how many edges were accepted.
    fn add_edges<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (Self::Node, Self::Node)>,
        Self: Sized,
    {
        pairs
            .into_iter()
            .fold(0, |added, (from, to)| added + usize::from(self.add_edge(from, to)))
    }

    /// Insert edge values one by one; returns how many were accepted
    fn insert_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = Edge<Self::Node, Self::Kind, Self::Weight>>,
        Self: Sized,
    {
        edges
            .into_iter()
            .fold(0, |added, edge| added + usize::from(self.insert_edge(edge)))
    }

    /// Whether `edge` is present with the same annotation the graph gives it
    fn contains_edge_value(&self, edge: &Edge<Self::Node, Self::Kind, Self::Weight>) -> bool
    where
        Self::Weight: PartialEq,
    {
        self.contains_edge(edge.from(), edge.to())
            && self.make_edge(edge.from().clone(), edge.to().clone()) == *edge
    }

    /// Remove `edge` only if it matches, annotation included
    fn remove_edge_value(&mut self, edge: &Edge<Self::Node, Self::Kind, Self::Weight>) -> bool
    where
        Self::Weight: PartialEq,
    {
        self.contains_edge_value(edge) && self.remove_edge(edge.from(), edge.to())
    }

    /// Number of neighbours of `node`
    fn degree(&self, node: &Self::Node) -> usize {
        self.neighbours(node).count()
    }

    /// Nodes with an edge pointing at `node`
    ///
    /// For undirected graphs these are exactly the neighbours.
    fn inbound<'a>(&'a self, node: &'a Self::Node) -> Inbound<'a, Self>
    where
        Self: Sized,
    {
        Inbound {
            graph: self,
            target: node,
            nodes: self.nodes(),
        }
    }

    /// Fresh iterator over the current edges
    ///
    /// Undirected edges are yielded once, in one of their two orientations.
    fn edges(&self) -> Edges<'_, Self>
    where
        Self: Sized,
    {
        Edges {
            graph: self,
            nodes: self.nodes(),
            current: None,
            expanded: HashSet::new(),
        }
    }

    fn edge_count(&self) -> usize
    where
        Self: Sized,
    {
        self.edges().count()
    }

    fn outbound_edges(&self, node: &Self::Node) -> Vec<Edge<Self::Node, Self::Kind, Self::Weight>>
    where
        Self: Sized,
    {
        self.neighbours(node)
            .map(|neighbour| self.make_edge(node.clone(), neighbour.clone()))
            .collect()
    }

    fn inbound_edges(&self, node: &Self::Node) -> Vec<Edge<Self::Node, Self::Kind, Self::Weight>>
    where
        Self: Sized,
    {
        self.inbound(node)
            .map(|source| self.make_edge(source.clone(), node.clone()))
            .collect()
    }
}

/// Iterator over the nodes that have an edge into a target node
pub struct Inbound<'a, G: Graph + 'a> {
    graph: &'a G,
    target: &'a G::Node,
    nodes: G::Nodes<'a>,
}

impl<'a, G: Graph + 'a> Iterator for Inbound<'a, G> {
    type Item = &'a G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let (graph, target) = (self.graph, self.target);
        self.nodes
            .by_ref()
            .find(|source| graph.contains_edge(source, target))
    }
}

/// Iterator over the edges of a graph, see [`Graph::edges`]
pub struct Edges<'a, G: Graph + 'a> {
    graph: &'a G,
    nodes: G::Nodes<'a>,
    current: Option<(&'a G::Node, G::Neighbours<'a>)>,
    // Undirected only: an edge back to an expanded node was already yielded
    expanded: HashSet<&'a G::Node>,
}

impl<'a, G: Graph + 'a> Iterator for Edges<'a, G> {
    type Item = Edge<G::Node, G::Kind, G::Weight>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, neighbours)) = &mut self.current {
                let from: &'a G::Node = *from;
                for to in neighbours.by_ref() {
                    if !<G::Kind as EdgeKind>::DIRECTED && self.expanded.contains(to) {
                        continue;
                    }
                    return Some(self.graph.make_edge(from.clone(), to.clone()));
                }
                if !<G::Kind as EdgeKind>::DIRECTED {
                    self.expanded.insert(from);
                }
            }
            let from = self.nodes.next()?;
            self.current = Some((from, self.graph.neighbours(from)));
        }
    }
}
