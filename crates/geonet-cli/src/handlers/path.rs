use geonet_core::graph::algorithms::{find_path, Strategy};
use geonet_core::graph::{Edge, EdgeKind, Graph};
use serde::Serialize;

use crate::cli::PathArgs;
use crate::context::{CliContext, LoadedGraph};
use crate::document::NodeId;
use crate::output;

#[derive(Debug, Serialize)]
pub struct PathReport<K: EdgeKind> {
    pub from: NodeId,
    pub to: NodeId,
    pub strategy: Strategy,
    pub found: bool,
    pub hops: usize,
    pub total_weight: f64,
    pub edges: Vec<Edge<NodeId, K, f64>>,
}

pub fn handle(ctx: &CliContext, args: PathArgs) -> anyhow::Result<()> {
    let strategy = args.strategy.unwrap_or(ctx.config.default_strategy);
    match ctx.graph() {
        LoadedGraph::Directed(graph) => {
            let report = output::timed(|| walk(ctx, &graph, &args, strategy))?;
            output::output_success(report)
        }
        LoadedGraph::Undirected(graph) => {
            let report = output::timed(|| walk(ctx, &graph, &args, strategy))?;
            output::output_success(report)
        }
    }
}

fn walk<G>(
    ctx: &CliContext,
    graph: &G,
    args: &PathArgs,
    strategy: Strategy,
) -> anyhow::Result<PathReport<G::Kind>>
where
    G: Graph<Node = NodeId, Weight = f64>,
{
    let from = ctx.resolve(graph, &args.from)?;
    let to = ctx.resolve(graph, &args.to)?;

    let edges = find_path(graph, &from, &to, strategy);
    let found = from == to || !edges.is_empty();
    tracing::debug!(%from, %to, %strategy, found, "path search");

    Ok(PathReport {
        found,
        hops: edges.len(),
        total_weight: edges.iter().map(|edge| *edge.weight()).sum(),
        from,
        to,
        strategy,
        edges,
    })
}
