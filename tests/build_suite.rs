use std::path::Path;

use dot_rs_builder::{BuildConfig, BuildOutput, DotGraph, Point, build_graph_from_json};

fn build_fixture(name: &str) -> BuildOutput {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    build_graph_from_json(&input, &BuildConfig::default()).expect("fixture build failed")
}

fn id(raw: &str) -> String {
    raw.to_string()
}

fn node_attr<'a>(graph: &'a DotGraph, node: &str, key: &str) -> Option<&'a str> {
    graph.node(&id(node)).and_then(|label| label.attr(key))
}

fn roots(graph: &DotGraph) -> Vec<String> {
    graph
        .nodes()
        .into_iter()
        .filter(|node| graph.parent(node).is_none())
        .collect()
}

#[test]
fn build_all_fixtures_cleanly() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = ["clusters.json", "strict_cross.json", "laid_out.json"];
    for name in fixtures {
        let output = build_fixture(name);
        assert!(output.diagnostics.is_empty(), "{name}: {:?}", output.diagnostics);
        assert!(output.graph.node_count() > 0, "{name}: no nodes");
    }
}

#[test]
fn clusters_fixture() {
    let graph = build_fixture("clusters.json").graph;

    assert!(graph.is_directed());
    assert!(graph.is_multigraph());
    let root = graph.graph();
    assert_eq!(root.attr("id"), Some("G"));
    assert_eq!(root.attr("rankdir"), Some("LR"));
    let bounds = root.geometry.expect("graph bb decoded");
    assert_eq!(bounds.width, 254.0);
    assert_eq!(bounds.height, 188.0 / 64.0);

    assert!(!graph.has_node(&id("empty")));
    assert_eq!(graph.children(&id("cluster_a")), vec!["a1", "a2"]);
    assert_eq!(graph.children(&id("cluster_b")), vec!["b1"]);
    assert_eq!(roots(&graph), vec!["cluster_a", "cluster_b", "c"]);

    assert_eq!(node_attr(&graph, "cluster_a", "label"), Some("A"));
    assert_eq!(node_attr(&graph, "cluster_a", "shape"), Some("box"));
    assert_eq!(node_attr(&graph, "cluster_a", "color"), None);
    assert_eq!(node_attr(&graph, "a1", "color"), Some("red"));
    assert_eq!(node_attr(&graph, "b1", "color"), None);
    assert_eq!(node_attr(&graph, "c", "shape"), Some("box"));

    let edges = graph.out_edges(&id("a1"), Some(id("b1"))).unwrap_or_default();
    assert_eq!(edges.len(), 2);
    assert_eq!(graph.edge(&id("a1"), &id("b1"), None).unwrap().attr("label"), Some("x"));
    assert_eq!(
        graph.edge(&id("a1"), &id("b1"), Some(id("edge1"))).unwrap().attr("label"),
        Some("y")
    );
}

#[test]
fn strict_cross_fixture() {
    let graph = build_fixture("strict_cross.json").graph;

    assert!(!graph.is_directed());
    assert!(!graph.is_multigraph());
    assert_eq!(graph.edge_count(), 4);
    for (v, w) in [("a", "c"), ("a", "d"), ("b", "c"), ("b", "d")] {
        let edge = graph.edge(&id(v), &id(w), None).unwrap_or_else(|| panic!("missing {v} -- {w}"));
        assert_eq!(edge.attr("color"), Some("blue"));
    }
    assert_eq!(graph.edge(&id("c"), &id("a"), None).unwrap().attr("weight"), Some("3"));
    assert_eq!(graph.parent(&id("a")).map(String::as_str), Some("sg1"));
    assert_eq!(graph.parent(&id("c")).map(String::as_str), Some("sg2"));
}

#[test]
fn laid_out_fixture() {
    let graph = build_fixture("laid_out.json").graph;

    let a = graph.node(&id("a")).unwrap().geometry.unwrap();
    assert_eq!((a.x, a.y, a.width, a.height), (27.0, -90.0, 48.0, 24.0));
    let b = graph.node(&id("b")).unwrap().geometry.unwrap();
    assert_eq!((b.x, b.y), (27.0, -18.0));

    let points = graph.edge(&id("a"), &id("b"), None).unwrap().points.clone().unwrap();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0], Point { x: 27.0, y: -36.104 });
    assert_eq!(points[2], Point { x: 27.0, y: -63.983 });
    assert_eq!(points[4], Point { x: 27.0, y: -46.112 });

    let bounds = graph.graph().geometry.unwrap();
    assert_eq!(bounds.height, 108.0 / 64.0);
}

#[test]
fn laid_out_fixture_without_layout_decoding() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/laid_out.json");
    let input = std::fs::read_to_string(path).expect("fixture read failed");
    let config = BuildConfig {
        decode_layout: false,
        ..BuildConfig::default()
    };
    let graph = build_graph_from_json(&input, &config).unwrap().graph;
    assert!(graph.node(&id("a")).unwrap().geometry.is_none());
    assert!(graph.edge(&id("a"), &id("b"), None).unwrap().points.is_none());
    assert!(graph.graph().geometry.is_none());
}

#[test]
fn malformed_tree_is_rejected() {
    assert!(build_graph_from_json(r#"{"type": "hypergraph"}"#, &BuildConfig::default()).is_err());
}
