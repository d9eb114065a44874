use std::fmt;

/// Diagnostic kinds ordered by priority.
///
/// Structural errors come first; warnings never affect graph validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum DiagnosticKind {
    // Sentinel connectivity
    StartWithoutOutgoing,
    EndWithoutIncoming,

    // Interior node connectivity
    Disconnected,
    MissingIncoming,
    MissingOutgoing,

    // Warnings
    DanglingEdge,
    MissingStart,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DanglingEdge | Self::MissingStart => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this diagnostic. Used as the default when no detail is given.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::StartWithoutOutgoing => "start node has no outgoing connection",
            Self::EndWithoutIncoming => "end node has no incoming connection",
            Self::Disconnected => "node is not connected",
            Self::MissingIncoming => "node has no incoming connection",
            Self::MissingOutgoing => "node has no outgoing connection",
            Self::DanglingEdge => "edge references a missing node",
            Self::MissingStart => "graph has no start node",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DanglingEdge => "edge references missing node `{}`".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The node a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub id: String,
    pub display_name: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Graph-level diagnostics carry no node.
    pub(crate) node: Option<NodeRef>,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, node: Option<NodeRef>, message: impl Into<String>) -> Self {
        Self {
            kind,
            node,
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, node: Option<NodeRef>) -> Self {
        Self::new(kind, node, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn node(&self) -> Option<&NodeRef> {
        self.node.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity())?;
        if let Some(node) = &self.node {
            write!(f, " at {} (`{}`)", node.display_name, node.id)?;
        }
        write!(f, ": {}", self.message)?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
