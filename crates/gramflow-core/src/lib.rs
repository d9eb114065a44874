#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for gramflow graphs.
//!
//! Two layers:
//! - **Deserialization layer** (`document`): 1:1 mapping to the editor's
//!   saved-grammar JSON
//! - **Analysis layer** (`graph`): typed nodes and edges consumed by the
//!   compiler, with a closed set of node variants

pub mod colors;
pub mod document;
pub mod graph;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
pub use document::{GraphDocument, GraphError};
pub use graph::{Edge, EdgeKey, Graph, GraphBuilder, Node, NodeKind, Position};
