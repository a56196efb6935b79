use geonet_core::graph::{
    DirectedAcyclicGraph, DirectedGraph, Graph, OrderedAdjacency, UndirectedGraph, Weighted,
};
use geonet_core::{AnalysisConfig, GraphError, GraphResult};
use std::path::Path;

use crate::document::{EdgeRecord, GraphDocument, NodeId};

pub type WeightFn = fn(&NodeId, &NodeId) -> f64;

/// Edges listed without a weight count as one hop
fn unit_weight(_: &NodeId, _: &NodeId) -> f64 {
    1.0
}

type Storage = OrderedAdjacency<NodeId>;

pub type DirectedDocGraph = Weighted<DirectedGraph<NodeId, Storage>, f64, WeightFn>;
pub type UndirectedDocGraph = Weighted<UndirectedGraph<NodeId, Storage>, f64, WeightFn>;
pub type DagDocGraph =
    Weighted<DirectedAcyclicGraph<DirectedGraph<NodeId, Storage>>, f64, WeightFn>;

/// Document graph in the orientation the document asks for
pub enum LoadedGraph {
    Directed(DirectedDocGraph),
    Undirected(UndirectedDocGraph),
}

pub struct CliContext {
    pub document: GraphDocument,
    pub config: AnalysisConfig,
    pub source: String,
}

impl CliContext {
    pub fn load(file_path: &str) -> GraphResult<Self> {
        let path = Path::new(file_path);
        if !path.exists() {
            return Err(GraphError::InvalidDocument(format!(
                "graph document not found: {file_path}"
            )));
        }
        let document = GraphDocument::load(path)?;
        tracing::debug!(
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            directed = document.directed,
            "loaded graph document"
        );

        Ok(Self {
            document,
            config: AnalysisConfig::load(),
            source: file_path.to_string(),
        })
    }

    pub fn graph(&self) -> LoadedGraph {
        if self.document.directed {
            let mut graph = DirectedDocGraph::new(unit_weight);
            self.document.populate(&mut graph);
            LoadedGraph::Directed(graph)
        } else {
            let mut graph = UndirectedDocGraph::new(unit_weight);
            self.document.populate(&mut graph);
            LoadedGraph::Undirected(graph)
        }
    }

    /// Document edges inserted in order through the acyclic decorator
    ///
    /// Undirected documents are read as if each edge pointed from `from` to `to`.
    pub fn dag(&self) -> (DagDocGraph, Vec<&EdgeRecord>) {
        let mut graph = DagDocGraph::new(unit_weight);
        let rejected = self.document.populate(&mut graph);
        (graph, rejected)
    }

    /// Resolve a node given on the command line against `graph`
    pub fn resolve<G: Graph<Node = NodeId>>(&self, graph: &G, raw: &str) -> GraphResult<NodeId> {
        let text = NodeId::Text(raw.to_string());
        let candidates = raw.parse::<NodeId>().into_iter().chain([text]);
        for candidate in candidates {
            if graph.contains_node(&candidate) {
                return Ok(candidate);
            }
        }
        Err(GraphError::NodeNotFound(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(json: &str) -> CliContext {
        CliContext {
            document: GraphDocument::from_json(json).unwrap(),
            config: AnalysisConfig::default(),
            source: "inline".to_string(),
        }
    }

    #[test]
    fn test_graph_orientation_follows_document() {
        let ctx = context(r#"{"directed": true, "edges": [{"from": 1, "to": 2}]}"#);
        match ctx.graph() {
            LoadedGraph::Directed(graph) => {
                assert!(graph.contains_edge(&NodeId::Number(1), &NodeId::Number(2)));
                assert!(!graph.contains_edge(&NodeId::Number(2), &NodeId::Number(1)));
            }
            LoadedGraph::Undirected(_) => panic!("expected a directed graph"),
        }
    }

    #[test]
    fn test_weights_come_from_document() {
        let ctx = context(r#"{"edges": [{"from": 1, "to": 2, "weight": 4.0}, {"from": 2, "to": 3}]}"#);
        let LoadedGraph::Undirected(graph) = ctx.graph() else {
            panic!("expected an undirected graph");
        };
        assert_eq!(graph.weight(&NodeId::Number(2), &NodeId::Number(1)), Some(4.0));
        assert_eq!(graph.weight(&NodeId::Number(3), &NodeId::Number(2)), Some(1.0));
    }

    #[test]
    fn test_dag_reports_rejections() {
        let ctx = context(
            r#"{"directed": true, "edges": [
                {"from": "a", "to": "b"}, {"from": "b", "to": "a"}, {"from": "c", "to": "c"}
            ]}"#,
        );
        let (dag, rejected) = ctx.dag();
        assert_eq!(dag.edge_count(), 1);
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_resolve() {
        let ctx = context(r#"{"edges": [{"from": 7, "to": "7b"}]}"#);
        let LoadedGraph::Undirected(graph) = ctx.graph() else {
            panic!("expected an undirected graph");
        };
        assert_eq!(ctx.resolve(&graph, "7").unwrap(), NodeId::Number(7));
        assert_eq!(ctx.resolve(&graph, "7b").unwrap(), NodeId::Text("7b".to_string()));
        assert!(matches!(
            ctx.resolve(&graph, "8"),
            Err(GraphError::NodeNotFound(_))
        ));
    }
}
