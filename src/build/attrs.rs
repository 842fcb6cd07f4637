use super::{Compiler, Diagnostic};
use crate::ir::{AttrKind, AttrStmt, Attrs, InlineAttrStmt};
use crate::label::{AttrSink, Geometry};
use crate::layout_attrs::parse_bounding_box;

impl Compiler<'_> {
    pub(super) fn attr_stmt(&mut self, stmt: &AttrStmt, scope: Option<&str>) {
        match stmt.attr_type {
            AttrKind::Graph => {
                let bounds = if self.config.decode_layout {
                    stmt.attrs
                        .get("bb")
                        .filter(|bb| !bb.is_empty())
                        .map(|bb| parse_bounding_box(bb, self.config.bounds_height_divisor))
                } else {
                    None
                };
                self.merge_into_scope(scope, &stmt.attrs, bounds);
            }
            kind => self.defaults.merge(kind, &stmt.attrs),
        }
    }

    pub(super) fn inline_attr_stmt(&mut self, stmt: &InlineAttrStmt, scope: Option<&str>) {
        self.merge_into_scope(scope, &stmt.attrs, None);
    }

    /// Merges onto the enclosing subgraph's node, or the graph label at the
    /// top level.
    fn merge_into_scope(&mut self, scope: Option<&str>, attrs: &Attrs, geometry: Option<Geometry>) {
        let target: Option<&mut dyn AttrSink> = match scope {
            Some(id) => self.graph
                .node_mut(&id.to_string())
                .map(|label| label as &mut dyn AttrSink),
            None => Some(self.graph.graph_mut() as &mut dyn AttrSink),
        };
        let applied = match target {
            Some(target) => {
                target.merge_attrs(attrs);
                if let Some(geometry) = geometry {
                    target.set_geometry(geometry);
                }
                true
            }
            None => false,
        };
        if !applied {
            let missing = scope.unwrap_or_default().to_string();
            self.report(Diagnostic::MissingScope(missing));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::build::{Diagnostic, GraphBuilder, build_graph};
    use crate::ir::{AttrKind, ParseTree, Statement, attrs};
    use crate::test_utils::GraphLookup;

    fn node(id: &str) -> Statement {
        Statement::node(id, attrs(&[]))
    }

    #[test]
    fn graph_attrs_at_top_level_go_to_graph_label() {
        let tree = ParseTree::digraph(vec![
            Statement::attr(AttrKind::Graph, attrs(&[("rankdir", "LR"), ("bb", "0,0,100,200")])),
            Statement::inline_attr(attrs(&[("label", "Top")])),
        ])
        .with_id("G");
        let graph = build_graph(&tree);
        let label = graph.graph();
        assert_eq!(label.attr("id"), Some("G"));
        assert_eq!(label.attr("rankdir"), Some("LR"));
        assert_eq!(label.attr("label"), Some("Top"));
        let bounds = label.geometry.unwrap();
        assert_eq!(bounds.x, 0.0);
        assert_eq!(bounds.y, 0.0);
        assert_eq!(bounds.width, 100.0);
        assert_eq!(bounds.height, 200.0 / 64.0);
    }

    #[test]
    fn graph_attrs_inside_subgraph_go_to_subgraph_node() {
        let tree = ParseTree::digraph(vec![Statement::subgraph(
            Some("cluster_a"),
            vec![
                Statement::attr(AttrKind::Graph, attrs(&[("bb", "8,16,32,64")])),
                Statement::inline_attr(attrs(&[("label", "A")])),
                node("x"),
            ],
        )]);
        let graph = build_graph(&tree);
        assert!(graph.graph().attrs.is_empty());
        assert!(graph.graph().geometry.is_none());

        let cluster = graph.node_label("cluster_a").unwrap();
        assert_eq!(cluster.attr("label"), Some("A"));
        assert_eq!(cluster.attr("bb"), Some("8,16,32,64"));
        let bounds = cluster.geometry.unwrap();
        assert_eq!(bounds.x, 8.0);
        assert_eq!(bounds.y, -16.0);
        assert_eq!(bounds.width, 32.0);
        assert_eq!(bounds.height, 1.0);
    }

    #[test]
    fn inline_attrs_do_not_decode_bounds() {
        let tree = ParseTree::digraph(vec![Statement::inline_attr(attrs(&[("bb", "0,0,1,1")]))]);
        let graph = build_graph(&tree);
        assert_eq!(graph.graph().attr("bb"), Some("0,0,1,1"));
        assert!(graph.graph().geometry.is_none());
    }

    #[test]
    fn graph_defaults_do_not_touch_node_defaults() {
        let tree = ParseTree::digraph(vec![
            Statement::attr(AttrKind::Graph, attrs(&[("color", "red")])),
            node("a"),
        ]);
        let graph = build_graph(&tree);
        assert_eq!(graph.node_label("a").unwrap().attr("color"), None);
        assert_eq!(graph.graph().attr("color"), Some("red"));
    }

    #[test]
    fn attrs_for_removed_scope_are_reported() {
        // The nested empty subgraph shares the outer id, so it removes the
        // outer subgraph's node before the inline attrs are applied.
        let tree = ParseTree::digraph(vec![Statement::subgraph(
            Some("s"),
            vec![
                Statement::subgraph(Some("s"), vec![]),
                Statement::inline_attr(attrs(&[("label", "lost")])),
            ],
        )]);
        let output = GraphBuilder::default().build(&tree);
        assert!(!output.graph.contains_node("s"));
        assert_eq!(
            output.diagnostics,
            vec![Diagnostic::MissingScope("s".to_string())]
        );
    }
}
