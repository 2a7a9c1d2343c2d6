use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use route_core::{render, shortest_path, Graph, Position, QueryReport};
use route_world::load_graph;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "floor_route",
    about = "Shortest hop path between two anchors of a floor graph"
)]
struct Cli {
    /// Graph document with an `anchors` array.
    #[arg(long, default_value = "etage.json")]
    graph: PathBuf,
    /// Start node, 1-based.
    #[arg(long, default_value_t = 10)]
    from: usize,
    /// Destination node, 1-based.
    #[arg(long, default_value_t = 6)]
    to: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

fn resolve(graph: &Graph, display_id: usize, role: &str) -> Result<Position> {
    let Some(position) = Position::from_display_id(display_id) else {
        bail!("{role} node must be 1 or greater");
    };
    graph
        .check_position(position)
        .with_context(|| format!("invalid {role} node"))
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let loaded = load_graph(&cli.graph)?;
    let graph = &loaded.graph;
    let start = resolve(graph, cli.from, "start")?;
    let dest = resolve(graph, cli.to, "destination")?;

    let result = shortest_path(graph, start, dest)?;
    tracing::debug!(start = %start, dest = %dest, hops = ?result.hops(), "query solved");

    match cli.format {
        OutputFormat::Text => writeln!(out, "{}", render(&result, start, dest))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &QueryReport::new(&result, start, dest))
                .context("writing JSON report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Whole error chain on one line.
fn error_line(err: &anyhow::Error) -> String {
    format!("error: {err:#}").replace('\n', " ")
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}
