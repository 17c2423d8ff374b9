use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use pathx_core::{NodeId, PathFinder, SearchConfig, ShortestPath};
use pathx_storage::{load_graph_with, LoadOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Shortest path between two nodes of an edge-list graph
#[derive(Parser, Debug)]
#[command(name = "pathx")]
#[command(about = "Dijkstra shortest paths over edge-list graphs", long_about = None)]
struct Args {
    /// Graph file: one `<id>` or `<from> <to> <weight>` record per line
    graph: PathBuf,

    /// Start node id
    start: NodeId,

    /// End node id
    end: NodeId,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the adjacency listing before searching
    #[arg(long)]
    dump: bool,

    /// Settle every reachable node instead of stopping at the target
    #[arg(long)]
    full_search: bool,

    /// Ignore lines starting with this prefix
    #[arg(long)]
    comment_prefix: Option<String>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting PathX v{}", env!("CARGO_PKG_VERSION"));

    let options = LoadOptions {
        comment_prefix: args.comment_prefix.clone(),
        ..LoadOptions::default()
    };
    let graph = load_graph_with(&args.graph, &options)
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;

    if args.dump {
        print!("{}", graph);
    }

    let config = SearchConfig {
        stop_at_target: !args.full_search,
    };
    let mut finder = PathFinder::with_config(&graph, config);

    match finder.find(&args.start, &args.end) {
        Ok(route) => {
            info!("Route found: {} hops, cost {}", route.hops(), route.cost);
            println!("{}", render(args.format, Some(&route))?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_no_path() => {
            println!("{}", render(args.format, None)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e).context("query failed"),
    }
}

/// Format a query outcome; `None` means the target is unreachable.
fn render(format: OutputFormat, route: Option<&ShortestPath>) -> anyhow::Result<String> {
    let out = match (format, route) {
        (OutputFormat::Text, Some(route)) => format!("{}\n{}", route.cost, route),
        (OutputFormat::Text, None) => "No Path".to_string(),
        (OutputFormat::Json, Some(route)) => serde_json::to_string_pretty(route)?,
        (OutputFormat::Json, None) => {
            serde_json::to_string_pretty(&serde_json::json!({ "cost": null, "path": [] }))?
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let route = ShortestPath {
            cost: 10,
            path: vec![NodeId::from(1), NodeId::from(2), NodeId::from(3)],
        };
        assert_eq!(render(OutputFormat::Text, Some(&route)).unwrap(), "10\n1 -> 2 -> 3");
        assert_eq!(render(OutputFormat::Text, None).unwrap(), "No Path");
    }

    #[test]
    fn test_json_output_is_pretty_either_way() {
        let route = ShortestPath {
            cost: 3,
            path: vec![NodeId::from(5), NodeId::from(6)],
        };
        let found = render(OutputFormat::Json, Some(&route)).unwrap();
        let missing = render(OutputFormat::Json, None).unwrap();
        assert!(found.contains('\n'));
        assert!(missing.contains('\n'));
        assert_eq!(missing, "{\n  \"cost\": null,\n  \"path\": []\n}");

        let parsed: serde_json::Value = serde_json::from_str(&found).unwrap();
        assert_eq!(parsed, serde_json::json!({"cost": 3, "path": ["5", "6"]}));
    }
}
