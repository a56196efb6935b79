use geonet_core::graph::algorithms::{connected_components, contract};
use geonet_core::graph::{Graph, Weighted};
use serde::Serialize;

use crate::cli::ComponentsArgs;
use crate::context::{CliContext, LoadedGraph, WeightFn};
use crate::document::NodeId;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub count: usize,
    pub components: Vec<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracted: Option<ContractionReport>,
}

/// Graph left after merging each close-knit component into one node
#[derive(Debug, Serialize)]
pub struct ContractionReport {
    pub merge_within: f64,
    pub workers: usize,
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

pub fn handle(ctx: &CliContext, args: ComponentsArgs) -> anyhow::Result<()> {
    let workers = args
        .workers
        .unwrap_or_else(|| ctx.config.effective_contraction_workers());
    let report = output::timed(|| match ctx.graph() {
        LoadedGraph::Directed(graph) => analyse(&graph, args.merge_within, workers),
        LoadedGraph::Undirected(graph) => analyse(&graph, args.merge_within, workers),
    })?;
    output::output_success(report)
}

fn analyse<G>(
    graph: &Weighted<G, f64, WeightFn>,
    merge_within: Option<f64>,
    workers: usize,
) -> anyhow::Result<ComponentsReport>
where
    G: Graph<Node = NodeId> + Default,
{
    let components = connected_components(graph).into_components();

    let contracted = match merge_within {
        Some(limit) => {
            // Merged components are named after their smallest node
            let merged = contract(
                graph.inner(),
                |a, b| graph.weight(a, b).is_some_and(|weight| weight <= limit),
                |a, b| a.min(b).clone(),
                workers,
            )?;
            Some(ContractionReport {
                merge_within: limit,
                workers: workers.max(1),
                nodes: merged.nodes().cloned().collect(),
                edges: merged.edges().map(|edge| edge.into_endpoints()).collect(),
            })
        }
        None => None,
    };

    Ok(ComponentsReport {
        count: components.len(),
        components,
        contracted,
    })
}
