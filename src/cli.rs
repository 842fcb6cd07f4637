use crate::build::GraphBuilder;
use crate::config::load_config;
use crate::graph_dump::{write_graph_dump, write_graph_dump_file};
use crate::ir::ParseTree;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dotb",
    version,
    about = "Build an attributed graph from a DOT statement tree"
)]
pub struct Args {
    /// Statement tree (.json or .json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the graph dump. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Build config file (JSON or JSON5)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Keep pos/bb/width/height as plain attributes
    #[arg(long = "no-layout")]
    pub no_layout: bool,

    /// Write single-line JSON
    #[arg(long = "compact")]
    pub compact: bool,
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())
        .with_context(|| "failed to load build config")?;
    if args.no_layout {
        config.decode_layout = false;
    }

    let (input, is_json5) = read_input(args.input.as_deref())?;
    let tree = parse_tree(&input, is_json5)?;
    let output = GraphBuilder::new(config).build(&tree);
    for diagnostic in &output.diagnostics {
        warn!(%diagnostic, "statement skipped");
    }
    info!(
        nodes = output.graph.node_count(),
        edges = output.graph.edge_count(),
        "graph built"
    );

    let pretty = !args.compact;
    match args.output.as_deref() {
        Some(path) => write_graph_dump_file(path, &output.graph, pretty)?,
        None => {
            let stdout = io::stdout();
            write_graph_dump(stdout.lock(), &output.graph, pretty)?;
            println!();
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<(String, bool)> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok((buf, false));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok((content, is_json5_path(path)));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok((buf, false))
}

fn is_json5_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json5"))
        .unwrap_or(false)
}

fn parse_tree(input: &str, is_json5: bool) -> Result<ParseTree> {
    let tree: ParseTree = if is_json5 {
        json5::from_str(input).context("input is not a DOT statement tree")?
    } else {
        serde_json::from_str(input).context("input is not a DOT statement tree")?
    };
    Ok(tree)
}
