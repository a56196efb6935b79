use std::hash::Hash;

use super::adjacency::AdjacencyContainer;
use super::core::{DirectedGraph, UndirectedGraph};
use super::dag::DirectedAcyclicGraph;
use super::traits::Graph;
use super::weighted::Weighted;
use crate::result::GraphResult;

/// Construction entry points for the graph types
pub struct GraphFactory;

impl GraphFactory {
    /// Empty directed graph over the default hashed container
    pub fn directed<N: Clone + Eq + Hash>() -> DirectedGraph<N> {
        DirectedGraph::new()
    }

    /// Empty undirected graph over the default hashed container
    pub fn undirected<N: Clone + Eq + Hash>() -> UndirectedGraph<N> {
        UndirectedGraph::new()
    }

    /// Directed graph stored in `container`
    pub fn directed_with<A>(container: A) -> DirectedGraph<A::Node, A>
    where
        A: AdjacencyContainer,
    {
        DirectedGraph::with_container(container)
    }

    /// Undirected graph stored in `container`; existing adjacencies are mirrored
    pub fn undirected_with<A>(container: A) -> UndirectedGraph<A::Node, A>
    where
        A: AdjacencyContainer,
    {
        UndirectedGraph::with_container(container)
    }

    /// Empty acyclic graph over the default hashed container
    pub fn dag<N: Clone + Eq + Hash>() -> DirectedAcyclicGraph<DirectedGraph<N>> {
        DirectedAcyclicGraph::new()
    }

    /// DAG stored in `container`
    ///
    /// Fails with `CycleDetected` when the container already describes a cycle.
    pub fn dag_with<A>(container: A) -> GraphResult<DirectedAcyclicGraph<DirectedGraph<A::Node, A>>>
    where
        A: AdjacencyContainer,
    {
        DirectedAcyclicGraph::try_wrap(DirectedGraph::with_container(container))
    }

    /// Weighted view over an empty graph of type `G`
    pub fn weighted<G, W, F>(weight_fn: F) -> Weighted<G, W, F>
    where
        G: Graph + Default,
        W: Clone,
        F: Fn(&G::Node, &G::Node) -> W,
    {
        Weighted::new(weight_fn)
    }
}
