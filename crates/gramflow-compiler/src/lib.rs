//! Gramflow compiler: turns an editor graph into a GBNF grammar.
//!
//! The pipeline:
//! - `analyze` - connectivity validation and feedback-edge analysis
//! - `rules` - rule synthesis from nodes and edges
//! - `optimize` - rule rewriting to a smaller fixpoint
//! - `emit` - ordered grammar text
//! - `diagnostics` - error reporting
//! - `compiler` - the `Compiler` facade tying the stages together
//!
//! # Example
//!
//! ```
//! use gramflow_core::{Graph, Node, NodeKind};
//!
//! let graph = Graph::builder()
//!     .node(Node::start("start"))
//!     .node(Node::new("x", NodeKind::Letter))
//!     .node(Node::end("end"))
//!     .path(&["start", "x", "end"])
//!     .edge("start", "end")
//!     .build();
//!
//! let grammar = gramflow_compiler::compile(&graph).expect("valid graph");
//! assert_eq!(grammar.to_string(), "root ::= [a-zA-Z]?");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod compiler;
pub mod diagnostics;
pub mod emit;
pub mod optimize;
pub mod rules;

#[cfg(test)]
pub mod test_utils;

use gramflow_core::Graph;

pub use analyze::{
    EdgeStyle, FeedbackAnalysis, FeedbackPolicy, GeometricPolicy, Validation,
    find_feedback_edges, find_feedback_edges_with, validate,
};
pub use compiler::{CompileConfig, Compilation, Compiler};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::Grammar;

/// Errors that can occur during compilation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("graph validation failed with {} errors", .0.error_count())]
    InvalidGraph(Diagnostics),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `graph` with default settings.
pub fn compile(graph: &Graph) -> Result<Grammar> {
    Compiler::new(graph).compile().map(Compilation::into_grammar)
}
