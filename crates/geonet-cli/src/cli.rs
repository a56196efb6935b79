use clap::{Args, Parser, Subcommand};
use geonet_core::graph::algorithms::Strategy;
use geonet_core::graph::CentralityKind;

#[derive(Parser)]
#[command(name = "geonet")]
#[command(about = "Graph analyses over JSON graph documents", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the graph document (or set GEONET_FILE env var)
    #[arg(value_name = "FILE", env = "GEONET_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Node, edge and component counts
    Summary,
    /// Score every node with a centrality measure
    Centrality(CentralityArgs),
    /// Find a path between two nodes
    Path(PathArgs),
    /// List connected components, optionally contracting them
    ///
    /// Directed documents are grouped by reachability along edge direction,
    /// so a contraction can keep an edge pointing back into an earlier
    /// component even when it weighs less than --merge-within.
    Components(ComponentsArgs),
    /// Rebuild the edges through the acyclic decorator
    Dag,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct CentralityArgs {
    /// degree or closeness (defaults to the configured measure)
    #[arg(long)]
    pub measure: Option<CentralityKind>,
    /// Only report the highest scoring nodes
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct PathArgs {
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
    /// bfs or dfs (defaults to the configured strategy)
    #[arg(long)]
    pub strategy: Option<Strategy>,
}

#[derive(Args)]
pub struct ComponentsArgs {
    /// Contract components of nodes joined by edges weighing at most this much
    #[arg(long, value_name = "WEIGHT")]
    pub merge_within: Option<f64>,
    /// Worker threads for contraction (defaults to the configured count)
    #[arg(long)]
    pub workers: Option<usize>,
}
