pub mod build;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod context;
pub mod graph_dump;
pub mod ir;
pub mod label;
pub mod layout_attrs;
#[cfg(test)]
mod test_utils;

pub use build::{BuildOutput, Diagnostic, GraphBuilder, build_graph};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{BuildConfig, load_config};
pub use graph_dump::{GraphDump, write_graph_dump};
pub use ir::{AttrKind, Attrs, GraphKind, ParseTree, Statement};
pub use label::{AttrSink, DotGraph, EdgeLabel, Geometry, GraphLabel, NodeLabel, Point};

/// Parses a JSON statement tree and builds it.
pub fn build_graph_from_json(input: &str, config: &BuildConfig) -> anyhow::Result<BuildOutput> {
    let tree: ParseTree = serde_json::from_str(input)?;
    Ok(GraphBuilder::new(config.clone()).build(&tree))
}
