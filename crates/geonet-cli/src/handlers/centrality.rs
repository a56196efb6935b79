use geonet_core::graph::{CentralityKind, Graph};
use serde::Serialize;

use crate::cli::CentralityArgs;
use crate::context::{CliContext, LoadedGraph};
use crate::document::NodeId;
use crate::output;

#[derive(Debug, Serialize)]
pub struct NodeScore {
    pub node: NodeId,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct CentralityReport {
    pub measure: CentralityKind,
    pub count: usize,
    pub scores: Vec<NodeScore>,
}

pub fn handle(ctx: &CliContext, args: CentralityArgs) -> anyhow::Result<()> {
    let measure = args.measure.unwrap_or(ctx.config.default_centrality);
    let report = output::timed(|| {
        Ok(match ctx.graph() {
            LoadedGraph::Directed(graph) => rank(&graph, measure, args.top),
            LoadedGraph::Undirected(graph) => rank(&graph, measure, args.top),
        })
    })?;
    output::output_success(report)
}

/// Scores sorted from most to least central, ties broken by node id
fn rank<G>(graph: &G, measure: CentralityKind, top: Option<usize>) -> CentralityReport
where
    G: Graph<Node = NodeId>,
{
    let mut scores: Vec<NodeScore> = measure
        .compute(graph)
        .into_iter()
        .map(|(node, score)| NodeScore { node, score })
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.node.cmp(&b.node)));
    if let Some(top) = top {
        scores.truncate(top);
    }

    CentralityReport {
        measure,
        count: scores.len(),
        scores,
    }
}
