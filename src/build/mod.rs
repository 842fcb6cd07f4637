//! Compiles a DOT statement tree into a [`DotGraph`].
//!
//! The builder walks the tree depth-first, keeping a stack of default
//! attribute frames for subgraph scoping. Each statement kind has its own
//! handler module:
//!
//! - `node`: node materialization and `pos` decoding
//! - `edge`: edge chains, cross products and multi-edge naming
//! - `subgraph`: scoped subgraph expansion and empty-subgraph elision
//! - `attrs`: `graph`/`node`/`edge` default statements and inline attributes

mod attrs;
mod edge;
mod node;
mod subgraph;

use crate::config::BuildConfig;
use crate::context::DefaultContext;
use crate::ir::{ParseTree, Statement};
use crate::label::{DotGraph, GraphLabel};
use graphlib_rust::GraphOption;
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

/// Recoverable anomalies met while building. None of them stop the build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("ignored statement of unknown kind")]
    UnknownStatementKind,
    #[error("ignored edge endpoint that is neither a node nor a subgraph")]
    InvalidEdgeEndpoint,
    #[error("subgraph `{0}` no longer exists; its attributes were dropped")]
    MissingScope(String),
    #[error("node `{0}` cannot be nested inside itself")]
    SelfNesting(String),
    /// A container operation refused the change.
    #[error("graph update rejected: {0}")]
    Graph(String),
}

pub struct BuildOutput {
    pub graph: DotGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Debug for BuildOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildOutput")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: BuildConfig,
}

impl GraphBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    #[instrument(level = "debug", skip_all, fields(kind = ?tree.kind, strict = tree.strict))]
    pub fn build(&self, tree: &ParseTree) -> BuildOutput {
        let mut graph = DotGraph::new(Some(GraphOption {
            directed: Some(tree.kind.is_directed()),
            multigraph: Some(!tree.strict),
            compound: Some(true),
        }));
        graph.set_graph(GraphLabel::for_root(tree.id.as_deref()));

        let mut compiler = Compiler {
            graph,
            defaults: DefaultContext::new(),
            config: &self.config,
            ids: IdGenerator::default(),
            diagnostics: Vec::new(),
        };
        for stmt in &tree.stmts {
            compiler.dispatch(stmt, None);
        }

        debug!(
            nodes = compiler.graph.node_count(),
            edges = compiler.graph.edge_count(),
            diagnostics = compiler.diagnostics.len(),
            "graph built"
        );
        BuildOutput {
            graph: compiler.graph,
            diagnostics: compiler.diagnostics,
        }
    }
}

/// Builds `tree` with the default configuration, discarding diagnostics.
pub fn build_graph(tree: &ParseTree) -> DotGraph {
    GraphBuilder::default().build(tree).graph
}

/// Hands out `sg1`, `edge2`, ... from one counter shared by all prefixes.
#[derive(Debug, Default)]
struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}{}", prefix, self.counter)
    }
}

/// State of one build: the graph under construction plus the scoped
/// defaults. `scope` arguments name the enclosing subgraph, `None` at the
/// top level.
struct Compiler<'a> {
    graph: DotGraph,
    defaults: DefaultContext,
    config: &'a BuildConfig,
    ids: IdGenerator,
    diagnostics: Vec<Diagnostic>,
}

impl Compiler<'_> {
    fn dispatch(&mut self, stmt: &Statement, scope: Option<&str>) {
        match stmt {
            Statement::Node(node) => self.node_stmt(node, scope),
            Statement::Edge(edge) => self.edge_stmt(edge, scope),
            Statement::Subgraph(subgraph) => self.subgraph_stmt(subgraph, scope),
            Statement::Attr(attr) => self.attr_stmt(attr, scope),
            Statement::InlineAttr(inline) => self.inline_attr_stmt(inline, scope),
            Statement::Unknown => self.report(Diagnostic::UnknownStatementKind),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "build diagnostic");
        self.diagnostics.push(diagnostic);
    }
}
