use geonet_core::graph::algorithms::{connected_components, has_cycle};
use geonet_core::graph::Graph;
use serde::Serialize;

use crate::context::{CliContext, LoadedGraph};
use crate::document::NodeId;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub source: String,
    pub directed: bool,
    pub nodes: usize,
    pub edges: usize,
    pub annotated_nodes: usize,
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub components: usize,
    /// Only reported for directed documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_cycle: Option<bool>,
}

pub fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let report = output::timed(|| {
        Ok(match ctx.graph() {
            LoadedGraph::Directed(graph) => summarize(ctx, &graph, Some(has_cycle(&graph))),
            LoadedGraph::Undirected(graph) => summarize(ctx, &graph, None),
        })
    })?;
    output::output_success(report)
}

fn summarize<G>(ctx: &CliContext, graph: &G, has_cycle: Option<bool>) -> Summary
where
    G: Graph<Node = NodeId>,
{
    let isolated_nodes = graph
        .nodes()
        .filter(|node| graph.degree(node) == 0 && graph.inbound(node).next().is_none())
        .count();
    let max_degree = graph
        .nodes()
        .map(|node| graph.degree(node))
        .max()
        .unwrap_or(0);

    Summary {
        source: ctx.source.clone(),
        directed: ctx.document.directed,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        annotated_nodes: ctx.document.annotated_nodes(),
        isolated_nodes,
        max_degree,
        components: connected_components(graph).len(),
        has_cycle,
    }
}
