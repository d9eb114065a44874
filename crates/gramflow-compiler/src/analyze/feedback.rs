//! Feedback-edge nomination.
//!
//! For each cycle one edge is picked as the edge that "goes back". The
//! rendering layer draws feedback edges as loops instead of smooth steps.
//! Which edge counts as going back is decided by a [`FeedbackPolicy`].

use std::cmp::Ordering;

use gramflow_core::{Edge, EdgeKey, Graph, Node};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::cycles::{Cycle, CycleFinder};

/// An edge of a cycle, with both endpoints resolved.
#[derive(Debug, Clone, Copy)]
pub struct CandidateEdge<'g> {
    pub source: &'g Node,
    pub target: &'g Node,
}

/// Strategy for nominating a feedback edge per cycle.
pub trait FeedbackPolicy {
    /// `Ordering::Greater` when `a` is a better feedback edge than `b`.
    fn compare(&self, a: &CandidateEdge<'_>, b: &CandidateEdge<'_>) -> Ordering;

    /// Whether the best edge of a cycle is recorded at all.
    fn accept(&self, winner: &CandidateEdge<'_>) -> bool;
}

/// Canvas-layout heuristic: prefer edges drawn right-to-left, then long
/// vertical edges, then edges pointing upwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricPolicy;

struct EdgeMetrics {
    right_to_left: f64,
    vertical_distance: f64,
    bottom_to_top: bool,
}

impl EdgeMetrics {
    fn of(edge: &CandidateEdge<'_>) -> Self {
        let source = edge.source.position;
        let target = edge.target.position;
        let dx = source.x - target.x;
        // Canvas y grows downwards.
        let bottom_to_top = source.y > target.y;
        let right_to_left = if dx == 0.0 {
            if bottom_to_top { 1.0 } else { -1.0 }
        } else {
            dx
        };
        Self {
            right_to_left,
            vertical_distance: (source.y - target.y).abs(),
            bottom_to_top,
        }
    }
}

impl FeedbackPolicy for GeometricPolicy {
    fn compare(&self, a: &CandidateEdge<'_>, b: &CandidateEdge<'_>) -> Ordering {
        let ma = EdgeMetrics::of(a);
        let mb = EdgeMetrics::of(b);
        ma.right_to_left
            .total_cmp(&mb.right_to_left)
            .then(ma.vertical_distance.total_cmp(&mb.vertical_distance))
            .then(ma.bottom_to_top.cmp(&mb.bottom_to_top))
            .then_with(|| a.source.id.cmp(&b.source.id))
    }

    fn accept(&self, winner: &CandidateEdge<'_>) -> bool {
        // Vertical edges score ±1, so a positive score already covers
        // bottom-to-top vertical edges.
        EdgeMetrics::of(winner).right_to_left > 0.0
    }
}

/// Rendering decision for a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    SelfConnecting { path_length: usize },
    SmoothStep,
}

/// Feedback edges and the length of the cycle each one closes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAnalysis {
    feedback_edges: IndexSet<EdgeKey>,
    path_lengths: IndexMap<EdgeKey, usize>,
}

impl FeedbackAnalysis {
    pub fn feedback_edges(&self) -> &IndexSet<EdgeKey> {
        &self.feedback_edges
    }

    pub fn path_lengths(&self) -> &IndexMap<EdgeKey, usize> {
        &self.path_lengths
    }

    pub fn is_empty(&self) -> bool {
        self.feedback_edges.is_empty()
    }

    pub fn is_feedback(&self, edge: &Edge) -> bool {
        self.feedback_edges.contains(edge.key().as_str())
    }

    pub fn path_length(&self, edge: &Edge) -> Option<usize> {
        self.path_lengths.get(edge.key().as_str()).copied()
    }

    /// How the editor should draw `edge`.
    pub fn style(&self, edge: &Edge) -> EdgeStyle {
        if edge.is_self_loop() || self.is_feedback(edge) {
            EdgeStyle::SelfConnecting {
                path_length: self.path_length(edge).unwrap_or(0),
            }
        } else {
            EdgeStyle::SmoothStep
        }
    }

    /// Mark every graph edge from `source` to `target` as feedback.
    fn record(&mut self, graph: &Graph, source: &str, target: &str, len: usize) {
        for edge in graph.edges() {
            if edge.source == source && edge.target == target {
                let key = edge.key();
                self.feedback_edges.insert(key.clone());
                // A later cycle through the same edge overwrites the length.
                self.path_lengths.insert(key, len);
            }
        }
    }
}

/// Nominate feedback edges with the default [`GeometricPolicy`].
pub fn find_feedback_edges(graph: &Graph) -> FeedbackAnalysis {
    find_feedback_edges_with(graph, &GeometricPolicy)
}

/// Nominate feedback edges with a custom policy.
///
/// Self-loops are always feedback edges with length 1, whatever the policy.
pub fn find_feedback_edges_with(graph: &Graph, policy: &impl FeedbackPolicy) -> FeedbackAnalysis {
    let index = graph.node_index();
    let mut analysis = FeedbackAnalysis::default();

    for cycle in CycleFinder::find_all(graph) {
        if cycle.is_self_loop() {
            let (node, _) = cycle.edges()[0];
            analysis.record(graph, node, node, 1);
            continue;
        }

        let Some(winner) = best_candidate(&cycle, &index, policy) else {
            continue;
        };
        if policy.accept(&winner) {
            analysis.record(graph, &winner.source.id, &winner.target.id, cycle.len());
        }
    }

    tracing::debug!(feedback = analysis.feedback_edges.len(), "analyzed cycles");
    analysis
}

fn best_candidate<'g>(
    cycle: &Cycle<'_>,
    index: &IndexMap<&str, &'g Node>,
    policy: &impl FeedbackPolicy,
) -> Option<CandidateEdge<'g>> {
    let mut best: Option<CandidateEdge<'g>> = None;
    for &(source, target) in cycle.edges() {
        let (Some(&source), Some(&target)) = (index.get(source), index.get(target)) else {
            continue;
        };
        let candidate = CandidateEdge { source, target };
        let better = match &best {
            None => true,
            Some(current) => policy.compare(&candidate, current) == Ordering::Greater,
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}
