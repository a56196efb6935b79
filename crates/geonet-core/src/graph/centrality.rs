use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use super::algorithms::{breadth_first, SearchOutcome};
use super::traits::Graph;
use crate::error::GraphError;

/// Read-only analysis producing one score per node
pub trait CentralityMeasure<G: Graph> {
    type Value;

    type Scores<'a>: Iterator<Item = (&'a G::Node, Self::Value)>
    where
        G: 'a,
        Self: 'a;

    /// Lazily score every node of `graph`
    fn scores<'a>(&'a self, graph: &'a G) -> Self::Scores<'a>;
}

/// Number of neighbours of each node
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeCentrality;

impl<G: Graph> CentralityMeasure<G> for DegreeCentrality {
    type Value = usize;

    type Scores<'a>
        = DegreeScores<'a, G>
    where
        G: 'a,
        Self: 'a;

    fn scores<'a>(&'a self, graph: &'a G) -> Self::Scores<'a> {
        DegreeScores {
            graph,
            nodes: graph.nodes(),
        }
    }
}

pub struct DegreeScores<'a, G: Graph + 'a> {
    graph: &'a G,
    nodes: G::Nodes<'a>,
}

impl<'a, G: Graph + 'a> Iterator for DegreeScores<'a, G> {
    type Item = (&'a G::Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        Some((node, self.graph.degree(node)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// Reciprocal of the mean hop distance to every reachable node
///
/// Nodes that reach nothing score 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosenessCentrality;

impl<G: Graph> CentralityMeasure<G> for ClosenessCentrality {
    type Value = f64;

    type Scores<'a>
        = ClosenessScores<'a, G>
    where
        G: 'a,
        Self: 'a;

    fn scores<'a>(&'a self, graph: &'a G) -> Self::Scores<'a> {
        ClosenessScores {
            graph,
            nodes: graph.nodes(),
        }
    }
}

pub struct ClosenessScores<'a, G: Graph + 'a> {
    graph: &'a G,
    nodes: G::Nodes<'a>,
}

impl<'a, G: Graph + 'a> Iterator for ClosenessScores<'a, G> {
    type Item = (&'a G::Node, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        Some((node, closeness(self.graph, node)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

/// Outcome recording the hop distance of every discovered node
struct HopDistances<N> {
    distances: HashMap<N, usize>,
}

impl<N: Clone + Eq + Hash> SearchOutcome<N> for HopDistances<N> {
    fn on_edge(&mut self, from: &N, to: &N) {
        let hops = self.distances.get(from).copied().unwrap_or(0) + 1;
        self.distances.entry(to.clone()).or_insert(hops);
    }
}

fn closeness<G: Graph>(graph: &G, node: &G::Node) -> f64 {
    let outcome = breadth_first(
        graph,
        node,
        |_, _| true,
        HopDistances {
            distances: HashMap::new(),
        },
    )
    .into_outcome();

    let reached = outcome.distances.len();
    let total: usize = outcome.distances.values().sum();
    if total == 0 {
        return 0.0;
    }
    reached as f64 / total as f64
}

/// Centrality measures selectable by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityKind {
    #[default]
    Degree,
    Closeness,
}

impl CentralityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Closeness => "closeness",
        }
    }

    /// Score every node of `graph` with this measure
    pub fn compute<G: Graph>(&self, graph: &G) -> Vec<(G::Node, f64)> {
        match self {
            Self::Degree => DegreeCentrality
                .scores(graph)
                .map(|(node, degree)| (node.clone(), degree as f64))
                .collect(),
            Self::Closeness => ClosenessCentrality
                .scores(graph)
                .map(|(node, score)| (node.clone(), score))
                .collect(),
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CentralityKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degree" => Ok(Self::Degree),
            "closeness" => Ok(Self::Closeness),
            other => Err(GraphError::Config(format!(
                "unknown centrality measure '{other}', expected degree or closeness"
            ))),
        }
    }
}
