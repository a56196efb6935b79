mod cli;
mod context;
mod document;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("GEONET_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::output_error(&format!("{:#}", e));
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "geonet", &mut std::io::stdout());
        return Ok(());
    }

    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("a graph document is required (FILE or GEONET_FILE)"))?;
    let ctx = CliContext::load(&file_path)?;

    match cli.command {
        Commands::Summary => handlers::summary::handle(&ctx),
        Commands::Centrality(args) => handlers::centrality::handle(&ctx, args),
        Commands::Path(args) => handlers::path::handle(&ctx, args),
        Commands::Components(args) => handlers::components::handle(&ctx, args),
        Commands::Dag => handlers::dag::handle(&ctx),
        Commands::Completions { .. } => Ok(()),
    }
}
