//! JSON deserialization for saved editor documents.
//!
//! The editor stores nodes with a `type` string and a free-form
//! `properties` bag. This module maps that shape onto [`Graph`], turning
//! type strings into the closed [`NodeKind`] set.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::graph::{Edge, Graph, Node, NodeKind, Position};
use crate::utils::unescape_literal;

/// Error while loading an editor document.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node `{id}` has unknown type `{type_name}`")]
    UnknownNodeType { id: String, type_name: String },
}

/// A loaded editor document: optional metadata plus the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphDocument {
    pub id: Option<String>,
    pub name: Option<String>,
    pub graph: Graph,
}

impl GraphDocument {
    /// Parse a document from JSON.
    ///
    /// Accepts both full saved grammars and bare `{ "nodes": [...], "edges": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Document name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

impl Graph {
    /// Parse only the graph part of an editor document.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        GraphDocument::from_json(json).map(|doc| doc.graph)
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    data: RawNodeData,
}

#[derive(Debug, Default, Deserialize)]
struct RawNodeData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    properties: IndexMap<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEdge {
    source: String,
    target: String,
    #[serde(default)]
    source_handle: Option<String>,
    #[serde(default)]
    target_handle: Option<String>,
}

impl TryFrom<RawDocument> for GraphDocument {
    type Error = GraphError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let nodes = raw
            .nodes
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = raw.edges.into_iter().map(Edge::from).collect();

        Ok(Self {
            id: raw.id,
            name: raw.name,
            graph: Graph::new(nodes, edges),
        })
    }
}

impl TryFrom<RawNode> for Node {
    type Error = GraphError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let props = &raw.data.properties;
        let kind = match raw.type_name.as_str() {
            "startNode" => NodeKind::Start,
            "endNode" => NodeKind::End,
            // Stored escaped by the editor; keep raw text in memory.
            "stringNode" => NodeKind::Literal {
                value: unescape_literal(&property_text(props, "value")),
            },
            "charSetNode" => NodeKind::CharSet {
                pattern: property_text(props, "pattern"),
            },
            "letterNode" => NodeKind::Letter,
            "digitNode" => NodeKind::Digit,
            "nonNewlineNode" => NodeKind::NonNewline,
            "identifierNode" => NodeKind::Identifier,
            "timeNode" => NodeKind::TimeDuration,
            "routerNode" => NodeKind::Router,
            _ => {
                return Err(GraphError::UnknownNodeType {
                    id: raw.id,
                    type_name: raw.type_name,
                });
            }
        };

        Ok(Node {
            id: raw.id,
            kind,
            position: raw.position,
            name: raw.data.name.filter(|n| !n.is_empty()),
        })
    }
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        Edge {
            source: raw.source,
            target: raw.target,
            source_handle: raw.source_handle,
            target_handle: raw.target_handle,
        }
    }
}

/// Read a property as text. Missing and null properties read as empty.
fn property_text(props: &IndexMap<String, Value>, key: &str) -> String {
    match props.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
