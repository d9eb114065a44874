//! Typed editor graph: nodes, edges, and node variants.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canvas position of a node.
///
/// Only the cycle analyzer looks at coordinates. `y` grows downwards,
/// matching the editor canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Node variants.
///
/// The set is closed: adding a variant forces every exhaustive `match`
/// over it (labels, intrinsic patterns, editor type names) to be updated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Entry sentinel; becomes the `root` rule.
    Start,
    /// Exit sentinel; contributes no symbol.
    End,
    /// Exact string match. Holds raw, unescaped text.
    Literal { value: String },
    /// Bracket expression copied verbatim into the grammar.
    CharSet { pattern: String },
    Letter,
    Digit,
    NonNewline,
    Identifier,
    TimeDuration,
    /// Pass-through node used to fan edges in or out.
    Router,
}

impl NodeKind {
    /// Human-readable variant label, as shown in the editor sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
            Self::Literal { .. } => "String Match",
            Self::CharSet { .. } => "Character Set",
            Self::Letter => "Letter",
            Self::Digit => "Digit",
            Self::NonNewline => "Non-Newline",
            Self::Identifier => "Identifier",
            Self::TimeDuration => "Time Duration",
            Self::Router => "Router",
        }
    }

    /// Node `type` string used by editor documents.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Start => "startNode",
            Self::End => "endNode",
            Self::Literal { .. } => "stringNode",
            Self::CharSet { .. } => "charSetNode",
            Self::Letter => "letterNode",
            Self::Digit => "digitNode",
            Self::NonNewline => "nonNewlineNode",
            Self::Identifier => "identifierNode",
            Self::TimeDuration => "timeNode",
            Self::Router => "routerNode",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Start and end nodes frame the graph and have their own connection rules.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// A graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    /// User-assigned display name. Empty strings are treated as absent.
    pub name: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
            name: None,
        }
    }

    pub fn start(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Start)
    }

    pub fn end(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::End)
    }

    pub fn literal(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Literal {
                value: value.into(),
            },
        )
    }

    pub fn char_set(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::CharSet {
                pattern: pattern.into(),
            },
        )
    }

    /// Set the canvas position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Set the user-assigned name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The user-assigned name, if present and non-empty.
    pub fn user_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Name used when reporting this node to the user.
    ///
    /// Sentinels always report by label; other nodes prefer the user name.
    pub fn display_name(&self) -> &str {
        if self.kind.is_sentinel() {
            return self.kind.label();
        }
        self.user_name().unwrap_or_else(|| self.kind.label())
    }
}

/// Composite edge identifier shared with the rendering layer.
///
/// Built from the non-empty parts of `[source, sourceHandle, target, targetHandle]`
/// joined by `->`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeKey(String);

impl EdgeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EdgeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directed "may be followed by" relation between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }

    /// Qualify the edge with connection-point discriminators.
    pub fn with_handles(mut self, source_handle: Option<&str>, target_handle: Option<&str>) -> Self {
        self.source_handle = source_handle.map(str::to_string);
        self.target_handle = target_handle.map(str::to_string);
        self
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn key(&self) -> EdgeKey {
        let parts = [
            Some(self.source.as_str()),
            self.source_handle.as_deref(),
            Some(self.target.as_str()),
            self.target_handle.as_deref(),
        ];
        let key = parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("->");
        EdgeKey(key)
    }
}

/// Immutable snapshot of the editor graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// The editor's fresh canvas: a start node and an end node, unconnected.
    pub fn initial() -> Self {
        Self::builder()
            .node(Node::start("start").named("root"))
            .node(Node::end("end").at(1000.0, 0.0))
            .build()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id. The first node wins when ids repeat.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Id → node lookup table in node order.
    pub fn node_index(&self) -> IndexMap<&str, &Node> {
        let mut index = IndexMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }
        index
    }

    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.target == id)
    }
}

/// Incremental graph construction.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add a plain edge without handles.
    pub fn edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(Edge::new(source, target));
        self
    }

    /// Add a chain of edges `a -> b -> c ...`.
    pub fn path(mut self, ids: &[&str]) -> Self {
        for pair in ids.windows(2) {
            self.edges.push(Edge::new(pair[0], pair[1]));
        }
        self
    }

    pub fn add_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn build(self) -> Graph {
        Graph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
