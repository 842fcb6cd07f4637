use crate::ir::Attrs;
use crate::label::{DotGraph, Geometry, Point};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializable snapshot of a built graph. Non-finite numbers serialize as
/// `null`.
#[derive(Debug, Serialize)]
pub struct GraphDump {
    pub directed: bool,
    pub multigraph: bool,
    pub compound: bool,
    pub graph: GraphLabelDump,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct GraphLabelDump {
    pub attrs: Attrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub attrs: Attrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub v: String,
    pub w: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub attrs: Attrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
}

impl GraphDump {
    pub fn from_graph(graph: &DotGraph) -> Self {
        let nodes = graph
            .nodes()
            .into_iter()
            .filter_map(|id| {
                let label = graph.node(&id)?;
                Some(NodeDump {
                    parent: graph.parent(&id).cloned(),
                    children: graph.children(&id),
                    attrs: label.attrs.clone(),
                    geometry: label.geometry,
                    id,
                })
            })
            .collect();

        let edges = graph
            .edges()
            .into_iter()
            .filter_map(|edge| {
                let label = graph.edge_with_obj(&edge)?;
                Some(EdgeDump {
                    v: edge.v,
                    w: edge.w,
                    name: edge.name,
                    attrs: label.attrs.clone(),
                    points: label.points.clone(),
                })
            })
            .collect();

        GraphDump {
            directed: graph.is_directed(),
            multigraph: graph.is_multigraph(),
            compound: graph.is_compound(),
            graph: GraphLabelDump {
                attrs: graph.graph().attrs.clone(),
                geometry: graph.graph().geometry,
            },
            nodes,
            edges,
        }
    }
}

pub fn write_graph_dump<W: Write>(writer: W, graph: &DotGraph, pretty: bool) -> anyhow::Result<()> {
    let dump = GraphDump::from_graph(graph);
    if pretty {
        serde_json::to_writer_pretty(writer, &dump)?;
    } else {
        serde_json::to_writer(writer, &dump)?;
    }
    Ok(())
}

pub fn write_graph_dump_file(path: &Path, graph: &DotGraph, pretty: bool) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_graph_dump(&mut writer, graph, pretty)?;
    writer.flush()?;
    Ok(())
}
