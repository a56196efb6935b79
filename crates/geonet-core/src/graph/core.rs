use std::hash::Hash;
use std::marker::PhantomData;

use super::adjacency::{AdjacencyContainer, AdjacencyMap};
use super::edge::{Directed, Edge, EdgeKind, Undirected};
use super::traits::Graph;

/// Default graph implementation
///
/// Owns an adjacency container and is generic over the edge kind `K`.
/// Undirected insertions are mirrored into the container, so for undirected
/// graphs `b` is a neighbour of `a` exactly when `a` is a neighbour of `b`.
/// Cloning deep-copies the node set and the adjacency container.
#[derive(Debug, Clone)]
pub struct SimpleGraph<N, K, A = AdjacencyMap<N>> {
    adjacency: A,
    marker: PhantomData<fn() -> (N, K)>,
}

pub type DirectedGraph<N, A = AdjacencyMap<N>> = SimpleGraph<N, Directed, A>;
pub type UndirectedGraph<N, A = AdjacencyMap<N>> = SimpleGraph<N, Undirected, A>;

impl<N, K, A: Default> Default for SimpleGraph<N, K, A> {
    fn default() -> Self {
        Self {
            adjacency: A::default(),
            marker: PhantomData,
        }
    }
}

impl<N, K, A> SimpleGraph<N, K, A>
where
    N: Clone + Eq + Hash,
    K: EdgeKind,
    A: AdjacencyContainer<Node = N>,
{
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `container` as the graph's storage
    ///
    /// Existing adjacencies become edges of the graph; for undirected graphs
    /// they are mirrored so the symmetry invariant holds from the start.
    pub fn with_container(container: A) -> Self {
        let mut graph = Self {
            adjacency: container,
            marker: PhantomData,
        };
        if !K::DIRECTED {
            let pairs: Vec<(N, N)> = graph
                .adjacency
                .nodes()
                .flat_map(|from| {
                    graph
                        .adjacency
                        .neighbours(from)
                        .map(move |to| (to.clone(), from.clone()))
                })
                .collect();
            for (from, to) in pairs {
                graph.adjacency.add_adjacency(from, to);
            }
        }
        graph
    }

    /// Create a graph holding `nodes` and no edges
    pub fn from_nodes<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        let mut graph = Self::new();
        graph.add_nodes(nodes);
        graph
    }

    /// The underlying adjacency container
    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }
}

impl<N, K, A> Graph for SimpleGraph<N, K, A>
where
    N: Clone + Eq + Hash,
    K: EdgeKind,
    A: AdjacencyContainer<Node = N>,
{
    type Node = N;
    type Kind = K;
    type Weight = ();

    type Nodes<'a>
        = A::Nodes<'a>
    where
        Self: 'a;

    type Neighbours<'a>
        = A::Neighbours<'a>
    where
        Self: 'a;

    fn add_node(&mut self, node: N) -> bool {
        self.adjacency.add_node(node)
    }

    fn remove_node(&mut self, node: &N) -> bool {
        self.adjacency.remove_node(node)
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_node(node)
    }

    fn add_edge(&mut self, from: N, to: N) -> bool {
        if self.contains_edge(&from, &to) {
            return false;
        }
        if !K::DIRECTED {
            self.adjacency.add_adjacency(to.clone(), from.clone());
        }
        self.adjacency.add_adjacency(from, to);
        true
    }

    fn insert_edge(&mut self, edge: Edge<N, K>) -> bool {
        let (from, to) = edge.into_endpoints();
        self.add_edge(from, to)
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let removed = self.adjacency.remove_adjacency(from, to);
        if K::DIRECTED {
            return removed;
        }
        self.adjacency.remove_adjacency(to, from) || removed
    }

    fn contains_edge(&self, from: &N, to: &N) -> bool {
        if K::DIRECTED {
            self.adjacency.has_adjacency(from, to)
        } else {
            self.adjacency.has_adjacency(from, to) && self.adjacency.has_adjacency(to, from)
        }
    }

    fn nodes(&self) -> Self::Nodes<'_> {
        self.adjacency.nodes()
    }

    fn neighbours<'a>(&'a self, node: &N) -> Self::Neighbours<'a> {
        self.adjacency.neighbours(node)
    }

    fn make_edge(&self, from: N, to: N) -> Edge<N, K> {
        Edge::new(from, to)
    }

    fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    fn clear(&mut self) {
        self.adjacency.clear();
    }
}
