use super::{Compiler, Diagnostic};
use crate::ir::{EdgeStmt, Statement};
use crate::label::{EdgeLabel, Point};
use crate::layout_attrs::parse_spline;
use indexmap::IndexSet;
use tracing::trace;

impl Compiler<'_> {
    /// Expands `a -> {b c} -> d` into one edge per endpoint pair of each
    /// consecutive link in the chain.
    pub(super) fn edge_stmt(&mut self, stmt: &EdgeStmt, scope: Option<&str>) {
        let points: Option<Vec<Point>> = if self.config.decode_layout {
            stmt.attrs
                .get("pos")
                .filter(|pos| !pos.is_empty())
                .map(|pos| parse_spline(pos))
        } else {
            None
        };

        let mut prev: Vec<String> = Vec::new();
        for elem in &stmt.elems {
            self.dispatch(elem, scope);

            let curr = match elem {
                Statement::Node(node) => vec![node.id.clone()],
                Statement::Subgraph(_) => collect_node_ids(elem),
                _ => {
                    self.report(Diagnostic::InvalidEdgeEndpoint);
                    continue;
                }
            };

            for v in &prev {
                for w in &curr {
                    self.connect(v, w, stmt, points.as_deref());
                }
            }
            prev = curr;
        }
    }

    fn connect(&mut self, v: &String, w: &String, stmt: &EdgeStmt, points: Option<&[Point]>) {
        let name = if self.graph.is_multigraph() && self.graph.has_edge(v, w, None) {
            Some(self.ids.next(&self.config.edge_name_prefix))
        } else {
            None
        };

        if !self.graph.has_edge(v, w, name.clone()) {
            trace!(%v, %w, name = ?name, "creating edge");
            let label = EdgeLabel::with_attrs(self.defaults.current().edge.clone());
            let created = self.graph.set_edge(v, w, Some(label), name.clone()).map(|_| ());
            if let Err(err) = created {
                self.report(Diagnostic::Graph(err.to_string()));
                return;
            }
        }

        if let Some(label) = self.graph.edge_mut(v, w, name) {
            label.merge(&stmt.attrs, points);
        }
    }
}

/// Ids of every node statement nested anywhere under `root`, in discovery
/// order. Uses an explicit worklist so deeply nested input cannot exhaust
/// the stack.
pub(super) fn collect_node_ids(root: &Statement) -> Vec<String> {
    let mut ids: IndexSet<&str> = IndexSet::new();
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        match current {
            Statement::Node(node) => {
                ids.insert(node.id.as_str());
            }
            Statement::Edge(edge) => stack.extend(edge.elems.iter()),
            Statement::Subgraph(subgraph) => stack.extend(subgraph.stmts.iter()),
            _ => {}
        }
    }
    ids.into_iter().map(str::to_string).collect()
}
