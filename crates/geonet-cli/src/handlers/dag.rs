use geonet_core::graph::Graph;
use serde::Serialize;

use crate::context::CliContext;
use crate::document::NodeId;
use crate::output;

#[derive(Debug, Serialize)]
pub struct RejectedEdge {
    pub from: NodeId,
    pub to: NodeId,
}

#[derive(Debug, Serialize)]
pub struct DagReport {
    pub accepted: usize,
    /// Edges closing a cycle, self-loops and repeated edges
    pub rejected: Vec<RejectedEdge>,
    pub roots: Vec<NodeId>,
    pub leaves: Vec<NodeId>,
    pub topological_order: Vec<NodeId>,
}

pub fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let report = output::timed(|| {
        let (graph, rejected) = ctx.dag();
        let dag = graph.inner();
        if !rejected.is_empty() {
            tracing::info!("{} document edges rejected by the acyclic check", rejected.len());
        }

        Ok(DagReport {
            accepted: dag.edge_count(),
            rejected: rejected
                .into_iter()
                .map(|edge| RejectedEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                })
                .collect(),
            roots: dag.root_nodes().cloned().collect(),
            leaves: dag.leaf_nodes().cloned().collect(),
            topological_order: dag.topological_order(),
        })
    })?;
    output::output_success(report)
}
