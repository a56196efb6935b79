use geonet_core::graph::{Edge, Graph};
use geonet_core::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Node identifier as written in a graph document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for NodeId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(s.to_string())))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Graph description read by every command
///
/// Edges add their endpoints implicitly, so `nodes` only needs to list
/// isolated or annotated nodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> GraphResult<Self> {
        serde_json::from_str(content).map_err(|e| GraphError::InvalidDocument(e.to_string()))
    }

    /// Nodes carrying a `data` payload
    pub fn annotated_nodes(&self) -> usize {
        self.nodes.iter().filter(|node| node.data.is_some()).count()
    }

    /// Insert the document's nodes and edges into `graph`, in document order
    ///
    /// Returns the edges the graph refused.
    pub fn populate<G>(&self, graph: &mut G) -> Vec<&EdgeRecord>
    where
        G: Graph<Node = NodeId, Weight = f64>,
    {
        for node in &self.nodes {
            graph.add_node(node.id.clone());
        }
        self.edges
            .iter()
            .filter(|record| {
                let (from, to) = (record.from.clone(), record.to.clone());
                let accepted = match record.weight {
                    Some(weight) => graph.insert_edge(Edge::weighted(from, to, weight)),
                    None => graph.add_edge(from, to),
                };
                !accepted
            })
            .collect()
    }
}
