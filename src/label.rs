use crate::ir::Attrs;
use graphlib_rust::Graph;
use serde::{Deserialize, Serialize};

/// Graph produced by the builder.
pub type DotGraph = Graph<GraphLabel, NodeLabel, EdgeLabel>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Decoded placement of a node or cluster, with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Something graph-scope attribute statements can be merged onto: the root
/// graph label or the node standing for a subgraph.
pub trait AttrSink {
    fn merge_attrs(&mut self, attrs: &Attrs);
    fn set_geometry(&mut self, geometry: Geometry);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeLabel {
    pub attrs: Attrs,
    pub geometry: Option<Geometry>,
}

impl NodeLabel {
    pub fn with_attrs(attrs: Attrs) -> Self {
        Self {
            attrs,
            geometry: None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

impl AttrSink for NodeLabel {
    fn merge_attrs(&mut self, attrs: &Attrs) {
        merge_into(&mut self.attrs, attrs);
    }

    fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    pub attrs: Attrs,
    pub points: Option<Vec<Point>>,
}

impl EdgeLabel {
    pub fn with_attrs(attrs: Attrs) -> Self {
        Self {
            attrs,
            points: None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Overlays statement attributes and decoded spline points. Points are
    /// overlaid by index, so a shorter spline keeps the tail of a longer one.
    pub fn merge(&mut self, attrs: &Attrs, points: Option<&[Point]>) {
        merge_into(&mut self.attrs, attrs);
        let Some(points) = points else {
            return;
        };
        let merged = self.points.get_or_insert_with(Vec::new);
        for (idx, point) in points.iter().enumerate() {
            match merged.get_mut(idx) {
                Some(slot) => *slot = *point,
                None => merged.push(*point),
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphLabel {
    pub attrs: Attrs,
    pub geometry: Option<Geometry>,
}

impl GraphLabel {
    /// Label for the root graph: `{id}` when the document is named.
    pub fn for_root(id: Option<&str>) -> Self {
        let mut attrs = Attrs::new();
        if let Some(id) = id {
            attrs.insert("id".to_string(), id.to_string());
        }
        Self {
            attrs,
            geometry: None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

impl AttrSink for GraphLabel {
    fn merge_attrs(&mut self, attrs: &Attrs) {
        merge_into(&mut self.attrs, attrs);
    }

    fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }
}

fn merge_into(target: &mut Attrs, attrs: &Attrs) {
    target.extend(attrs.iter().map(|(key, value)| (key.clone(), value.clone())));
}
