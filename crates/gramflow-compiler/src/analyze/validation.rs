//! Connectivity validation.
//!
//! Checks that every node sits on some path: start nodes need an outgoing
//! edge, end nodes an incoming one, and every other node both. Each
//! offending node yields exactly one error, in node order.
//!
//! Edges naming unknown nodes and graphs without a start node are reported
//! as warnings and do not affect validity.

use gramflow_core::{Graph, NodeKind};
use indexmap::IndexSet;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    problems: Vec<String>,
    diagnostics: Diagnostics,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Display names of offending nodes, in node order.
    pub fn problems(&self) -> &[String] {
        &self.problems
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Check the connectivity of every node in `graph`.
pub fn validate(graph: &Graph) -> Validation {
    let mut sources: IndexSet<&str> = IndexSet::new();
    let mut targets: IndexSet<&str> = IndexSet::new();
    for edge in graph.edges() {
        sources.insert(edge.source.as_str());
        targets.insert(edge.target.as_str());
    }

    let mut problems = Vec::new();
    let mut diag = Diagnostics::new();

    for node in graph.nodes() {
        let has_outgoing = sources.contains(node.id.as_str());
        let has_incoming = targets.contains(node.id.as_str());

        let kind = match node.kind {
            NodeKind::Start if !has_outgoing => DiagnosticKind::StartWithoutOutgoing,
            NodeKind::End if !has_incoming => DiagnosticKind::EndWithoutIncoming,
            NodeKind::Start | NodeKind::End => continue,
            _ => match (has_incoming, has_outgoing) {
                (true, true) => continue,
                (false, false) => DiagnosticKind::Disconnected,
                (false, true) => DiagnosticKind::MissingIncoming,
                (true, false) => DiagnosticKind::MissingOutgoing,
            },
        };

        problems.push(node.display_name().to_string());
        diag.report_node(kind, node).emit();
    }

    let known = graph.node_index();
    for edge in graph.edges() {
        for endpoint in [&edge.source, &edge.target] {
            if !known.contains_key(endpoint.as_str()) {
                diag.report(DiagnosticKind::DanglingEdge)
                    .message(endpoint.as_str())
                    .emit();
            }
        }
    }

    if !graph.is_empty() && !graph.nodes().iter().any(|n| n.kind.is_start()) {
        diag.report(DiagnosticKind::MissingStart)
            .hint("the grammar will have no `root` rule")
            .emit();
    }

    tracing::debug!(
        errors = diag.error_count(),
        warnings = diag.warning_count(),
        "validated graph"
    );

    Validation {
        problems,
        diagnostics: diag,
    }
}
