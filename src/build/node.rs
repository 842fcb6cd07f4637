use super::{Compiler, Diagnostic};
use crate::config::BuildConfig;
use crate::ir::{Attrs, NodeStmt};
use crate::label::{AttrSink, Geometry, NodeLabel};
use crate::layout_attrs::{parse_point, scale};
use tracing::trace;

impl Compiler<'_> {
    /// Creates `id` from the current node defaults unless it already exists.
    pub(super) fn ensure_node(&mut self, id: &str, scope: Option<&str>) {
        let id = id.to_string();
        if self.graph.has_node(&id) {
            return;
        }
        trace!(node = %id, parent = ?scope, "creating node");
        let label = NodeLabel::with_attrs(self.defaults.current().node.clone());
        self.graph.set_node(id.clone(), Some(label));

        // New nodes start at the root, so only nested ones need a parent.
        let Some(scope) = scope else {
            return;
        };
        if scope == id {
            // Only reachable once a nested subgraph removed the scope node.
            self.report(Diagnostic::SelfNesting(id));
            return;
        }
        let parented = self.graph.set_parent(&id, Some(scope.to_string())).map(|_| ());
        if let Err(err) = parented {
            self.report(Diagnostic::Graph(err.to_string()));
        }
    }

    pub(super) fn node_stmt(&mut self, stmt: &NodeStmt, scope: Option<&str>) {
        self.ensure_node(&stmt.id, scope);

        let geometry = if self.config.decode_layout {
            stmt.attrs
                .get("pos")
                .filter(|pos| !pos.is_empty())
                .map(|pos| node_geometry(pos, &stmt.attrs, self.config))
        } else {
            None
        };

        if let Some(label) = self.graph.node_mut(&stmt.id) {
            label.merge_attrs(&stmt.attrs);
            if let Some(geometry) = geometry {
                label.set_geometry(geometry);
            }
        }
    }
}

/// Geometry of a laid-out node. Sizes come from the statement's own
/// `width`/`height`, not from inherited defaults.
fn node_geometry(pos: &str, attrs: &Attrs, config: &BuildConfig) -> Geometry {
    let center = parse_point(pos);
    Geometry {
        x: center.x,
        y: center.y,
        width: scale(
            attrs.get("width").map(String::as_str),
            config.node_width_scale,
        ),
        height: scale(
            attrs.get("height").map(String::as_str),
            config.node_height_scale,
        ),
    }
}
