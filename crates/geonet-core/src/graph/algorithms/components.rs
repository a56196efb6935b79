use std::collections::HashMap;
use std::hash::Hash;

use super::search::{NodeStatus, Search, SearchOutcome, Strategy};
use crate::graph::traits::Graph;

/// Outcome grouping opened nodes into components
///
/// Each run of the search from a fresh start node opens a new group; every
/// node opened during that run joins it.
#[derive(Debug, Clone)]
struct ComponentLabels<N> {
    components: Vec<Vec<N>>,
}

impl<N: Clone> SearchOutcome<N> for ComponentLabels<N> {
    fn on_open(&mut self, node: &N) {
        if let Some(current) = self.components.last_mut() {
            current.push(node.clone());
        }
    }
}

/// Partition of a graph's nodes into connected components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents<N> {
    components: Vec<Vec<N>>,
}

impl<N: Clone + Eq + Hash> ConnectedComponents<N> {
    /// Components in discovery order, each listing its nodes in visit order
    pub fn components(&self) -> &[Vec<N>] {
        &self.components
    }

    /// Consume into the component list
    pub fn into_components(self) -> Vec<Vec<N>> {
        self.components
    }

    /// Node -> index of its component
    pub fn as_map(&self) -> HashMap<N, usize> {
        self.components
            .iter()
            .enumerate()
            .flat_map(|(index, nodes)| nodes.iter().map(move |node| (node.clone(), index)))
            .collect()
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Components where two nodes belong together if an edge links them
///
/// For directed graphs the search follows edge direction, so the result
/// groups nodes by reachability from the first node of each group.
pub fn connected_components<G: Graph>(graph: &G) -> ConnectedComponents<G::Node> {
    connected_components_by(graph, |_, _| true)
}

/// Components under `relation`: an edge is only followed when
/// `relation(from, to)` holds
pub fn connected_components_by<G, R>(graph: &G, mut relation: R) -> ConnectedComponents<G::Node>
where
    G: Graph,
    R: FnMut(&G::Node, &G::Node) -> bool,
{
    let mut search = Search::new(ComponentLabels {
        components: Vec::new(),
    });

    for node in graph.nodes() {
        if search.status(node) != NodeStatus::Unknown {
            continue;
        }
        search.outcome_mut().components.push(Vec::new());
        search.run(graph, node, Strategy::BreadthFirst, &mut relation);
    }

    let components = search.into_outcome().components;
    tracing::trace!(count = components.len(), "labelled connected components");
    ConnectedComponents { components }
}
