//! `&str` shorthands for inspecting a built graph in tests.

use crate::label::{DotGraph, EdgeLabel, NodeLabel};

pub(crate) trait GraphLookup {
    fn node_label(&self, id: &str) -> Option<&NodeLabel>;
    fn edge_label(&self, v: &str, w: &str, name: Option<&str>) -> Option<&EdgeLabel>;
    fn contains_node(&self, id: &str) -> bool;
    fn contains_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool;
    fn parent_id(&self, id: &str) -> Option<&str>;
    fn child_ids(&self, id: &str) -> Vec<String>;
    /// `(v, w, name)` of every edge, in insertion order.
    fn edge_keys(&self) -> Vec<(String, String, Option<String>)>;
}

impl GraphLookup for DotGraph {
    fn node_label(&self, id: &str) -> Option<&NodeLabel> {
        self.node(&id.to_string())
    }

    fn edge_label(&self, v: &str, w: &str, name: Option<&str>) -> Option<&EdgeLabel> {
        self.edge(&v.to_string(), &w.to_string(), name.map(str::to_string))
    }

    fn contains_node(&self, id: &str) -> bool {
        self.has_node(&id.to_string())
    }

    fn contains_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.has_edge(&v.to_string(), &w.to_string(), name.map(str::to_string))
    }

    fn parent_id(&self, id: &str) -> Option<&str> {
        self.parent(&id.to_string()).map(String::as_str)
    }

    fn child_ids(&self, id: &str) -> Vec<String> {
        self.children(&id.to_string())
    }

    fn edge_keys(&self) -> Vec<(String, String, Option<String>)> {
        self.edges()
            .into_iter()
            .map(|edge| (edge.v, edge.w, edge.name))
            .collect()
    }
}
