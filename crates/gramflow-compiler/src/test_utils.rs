//! Test utilities.

use gramflow_core::Graph;

use crate::{Compiler, Error};

/// Load an editor document, panicking on malformed input.
pub fn graph_from_json(json: &str) -> Graph {
    Graph::from_json(json).unwrap_or_else(|e| panic!("invalid test document: {e}"))
}

/// Compiled grammar text. Panics with rendered diagnostics if the graph is invalid.
pub fn expect_grammar(graph: &Graph) -> String {
    match Compiler::new(graph).compile() {
        Ok(compilation) => compilation.grammar().to_string(),
        Err(Error::InvalidGraph(diagnostics)) => {
            panic!("expected a valid graph:\n{}", diagnostics.render())
        }
    }
}

/// Grammar text without optimization.
pub fn expect_unoptimized_grammar(graph: &Graph) -> String {
    match Compiler::new(graph).optimize(false).compile() {
        Ok(compilation) => compilation.grammar().to_string(),
        Err(Error::InvalidGraph(diagnostics)) => {
            panic!("expected a valid graph:\n{}", diagnostics.render())
        }
    }
}

/// Rendered diagnostics. Panics if the graph compiles.
pub fn expect_invalid(graph: &Graph) -> String {
    match Compiler::new(graph).compile() {
        Ok(compilation) => panic!("expected an invalid graph, got:\n{}", compilation.grammar()),
        Err(Error::InvalidGraph(diagnostics)) => diagnostics.render(),
    }
}
