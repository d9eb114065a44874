//! Graph analysis that runs before, or beside, rule synthesis.
//!
//! - `validation` - per-node connectivity checks that gate compilation
//! - `cycles` - depth-first cycle discovery
//! - `feedback` - one feedback edge per cycle, for the rendering layer

pub mod cycles;
pub mod feedback;
pub mod validation;

#[cfg(test)]
mod validation_tests;

pub use cycles::{Cycle, CycleFinder};
pub use feedback::{
    CandidateEdge, EdgeStyle, FeedbackAnalysis, FeedbackPolicy, GeometricPolicy,
    find_feedback_edges, find_feedback_edges_with,
};
pub use validation::{Validation, validate};
