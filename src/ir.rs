use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute mapping as it appears on statements and labels.
pub type Attrs = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Graph,
    Digraph,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Digraph)
    }
}

/// Root of a parsed DOT document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseTree {
    #[serde(rename = "type")]
    pub kind: GraphKind,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub stmts: Vec<Statement>,
}

impl ParseTree {
    pub fn new(kind: GraphKind, stmts: Vec<Statement>) -> Self {
        Self {
            kind,
            strict: false,
            id: None,
            stmts,
        }
    }

    pub fn digraph(stmts: Vec<Statement>) -> Self {
        Self::new(GraphKind::Digraph, stmts)
    }

    pub fn graph(stmts: Vec<Statement>) -> Self {
        Self::new(GraphKind::Graph, stmts)
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrKind {
    Node,
    Edge,
    Graph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Statement {
    Node(NodeStmt),
    Edge(EdgeStmt),
    Subgraph(SubgraphStmt),
    Attr(AttrStmt),
    InlineAttr(InlineAttrStmt),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStmt {
    pub id: String,
    #[serde(default)]
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeStmt {
    #[serde(default)]
    pub elems: Vec<Statement>,
    #[serde(default)]
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubgraphStmt {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub stmts: Vec<Statement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttrStmt {
    pub attr_type: AttrKind,
    #[serde(default)]
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineAttrStmt {
    #[serde(default)]
    pub attrs: Attrs,
}

impl Statement {
    pub fn node(id: impl Into<String>, attrs: Attrs) -> Self {
        Self::Node(NodeStmt {
            id: id.into(),
            attrs,
        })
    }

    pub fn edge(elems: Vec<Statement>, attrs: Attrs) -> Self {
        Self::Edge(EdgeStmt { elems, attrs })
    }

    pub fn subgraph(id: Option<&str>, stmts: Vec<Statement>) -> Self {
        Self::Subgraph(SubgraphStmt {
            id: id.map(str::to_string),
            stmts,
        })
    }

    pub fn attr(attr_type: AttrKind, attrs: Attrs) -> Self {
        Self::Attr(AttrStmt { attr_type, attrs })
    }

    pub fn inline_attr(attrs: Attrs) -> Self {
        Self::InlineAttr(InlineAttrStmt { attrs })
    }
}

/// Builds an attribute mapping from literal pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> Attrs {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
