//! Cycle discovery over the node graph.
//!
//! Depth-first search from every unvisited node in node order, keeping the
//! current path on an explicit stack. Every edge into a node that is still
//! on the path closes a cycle. A node is marked visited once all of its
//! outgoing edges have been explored.

use gramflow_core::Graph;
use indexmap::{IndexMap, IndexSet};

/// A directed cycle, as the ordered list of its edges.
///
/// The last edge closes the cycle back onto the first edge's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<'g> {
    edges: Vec<(&'g str, &'g str)>,
}

impl<'g> Cycle<'g> {
    pub fn edges(&self) -> &[(&'g str, &'g str)] {
        &self.edges
    }

    /// Number of edges (equivalently, nodes) in the cycle.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_self_loop(&self) -> bool {
        self.edges.len() == 1
    }
}

pub struct CycleFinder<'g> {
    adj: IndexMap<&'g str, Vec<&'g str>>,
    visited: IndexSet<&'g str>,
    on_path: IndexMap<&'g str, usize>,
    path: Vec<&'g str>,
}

impl<'g> CycleFinder<'g> {
    /// Find every cycle closed by a back edge, in discovery order.
    ///
    /// Edges whose endpoints name no node are ignored.
    pub fn find_all(graph: &'g Graph) -> Vec<Cycle<'g>> {
        let index = graph.node_index();

        let mut adj: IndexMap<&'g str, Vec<&'g str>> =
            index.keys().map(|&id| (id, Vec::new())).collect();
        for edge in graph.edges() {
            if !index.contains_key(edge.target.as_str()) {
                continue;
            }
            if let Some(neighbors) = adj.get_mut(edge.source.as_str()) {
                neighbors.push(edge.target.as_str());
            }
        }

        let mut finder = Self {
            adj,
            visited: IndexSet::new(),
            on_path: IndexMap::new(),
            path: Vec::new(),
        };

        let mut cycles = Vec::new();
        for &root in index.keys() {
            if !finder.visited.contains(root) {
                finder.walk(root, &mut cycles);
            }
        }
        cycles
    }

    fn walk(&mut self, root: &'g str, cycles: &mut Vec<Cycle<'g>>) {
        self.enter(root);
        let mut stack: Vec<(&'g str, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            let next = self.adj.get(node).and_then(|n| n.get(cursor)).copied();

            let Some(next) = next else {
                stack.pop();
                self.leave(node);
                continue;
            };
            frame.1 += 1;

            if let Some(&start) = self.on_path.get(next) {
                let cycle = self.cycle_from(start, next);
                tracing::trace!(len = cycle.len(), from = node, to = next, "cycle found");
                cycles.push(cycle);
            } else if !self.visited.contains(next) {
                self.enter(next);
                stack.push((next, 0));
            }
        }
    }

    fn enter(&mut self, node: &'g str) {
        self.on_path.insert(node, self.path.len());
        self.path.push(node);
    }

    fn leave(&mut self, node: &'g str) {
        self.path.pop();
        self.on_path.swap_remove(node);
        self.visited.insert(node);
    }

    fn cycle_from(&self, start: usize, closing_target: &'g str) -> Cycle<'g> {
        let members = &self.path[start..];
        let mut edges: Vec<_> = members.windows(2).map(|w| (w[0], w[1])).collect();
        if let Some(&last) = members.last() {
            edges.push((last, closing_target));
        }
        Cycle { edges }
    }
}
