//! Rule synthesis: one named rule per node, successors from edges.
//!
//! Naming runs in two passes so user-chosen names always win over
//! generated `_rule<index>` names, whatever the node order.

use std::collections::HashSet;

use gramflow_core::utils::{claim_unique_name, escape_literal, normalize_identifier};
use gramflow_core::{Graph, Node, NodeKind};
use indexmap::IndexMap;

use super::{ROOT, Rule, RuleSet, Successor};

/// What an edge into a node contributes to its source rule.
#[derive(Debug, Clone)]
enum Target {
    Rule(String),
    End,
}

impl Target {
    fn successor(&self) -> Successor {
        match self {
            Self::Rule(name) => Successor::Rule(name.clone()),
            Self::End => Successor::End,
        }
    }
}

/// Grammar fragment matched by a node on its own.
pub fn intrinsic_pattern(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Literal { value } => format!("\"{}\"", escape_literal(value)),
        NodeKind::CharSet { pattern } if pattern.is_empty() => "[]".to_string(),
        NodeKind::CharSet { pattern } => pattern.clone(),
        NodeKind::Letter => "[a-zA-Z]".to_string(),
        NodeKind::Digit => "[0-9]".to_string(),
        NodeKind::NonNewline => "[^\\n]".to_string(),
        NodeKind::Identifier => "[a-zA-Z_][a-zA-Z0-9_]*".to_string(),
        NodeKind::TimeDuration => {
            r#"[0-9] [0-9]? ("s" | "m" | "h" | "d" | "w" | "mo" | "y")"#.to_string()
        }
        NodeKind::Start | NodeKind::End | NodeKind::Router => String::new(),
    }
}

/// Build the initial rule set for `graph`.
///
/// Every start node maps onto the single `root` rule. End nodes get no
/// rule; edges into them add [`Successor::End`]. Edges leaving an end node
/// or naming an unknown node are skipped.
pub fn synthesize(graph: &Graph) -> RuleSet {
    let nodes = unique_nodes(graph);
    let targets = assign_names(&nodes);

    let mut rules = RuleSet::new();
    for &(_, node) in &nodes {
        let Some(Target::Rule(name)) = targets.get(node.id.as_str()) else {
            continue;
        };
        if !rules.contains(name) {
            rules.insert(Rule::new(name.clone(), intrinsic_pattern(&node.kind)));
        }
    }

    for edge in graph.edges() {
        let (Some(source), Some(target)) = (
            targets.get(edge.source.as_str()),
            targets.get(edge.target.as_str()),
        ) else {
            tracing::warn!(
                source = %edge.source,
                target = %edge.target,
                "skipping edge with unknown endpoint"
            );
            continue;
        };
        let Target::Rule(source) = source else {
            tracing::debug!(source = %edge.source, "skipping edge leaving an end node");
            continue;
        };
        if let Some(rule) = rules.get_mut(source) {
            rule.successors.push(target.successor());
        }
    }

    tracing::debug!(rules = rules.len(), "synthesized rules");
    rules
}

/// Nodes with their position in the graph, first occurrence of each id only.
fn unique_nodes(graph: &Graph) -> Vec<(usize, &Node)> {
    let mut seen = HashSet::new();
    graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|&(_, node)| seen.insert(node.id.as_str()))
        .collect()
}

fn assign_names<'g>(nodes: &[(usize, &'g Node)]) -> IndexMap<&'g str, Target> {
    let mut claimed: HashSet<String> = HashSet::from([ROOT.to_string()]);
    let mut targets: IndexMap<&'g str, Target> = IndexMap::with_capacity(nodes.len());

    for &(_, node) in nodes {
        if node.kind.is_sentinel() {
            continue;
        }
        if let Some(name) = node.user_name() {
            let name = claim_unique_name(&normalize_identifier(name), &mut claimed);
            targets.insert(node.id.as_str(), Target::Rule(name));
        }
    }

    for &(index, node) in nodes {
        let target = match node.kind {
            NodeKind::Start => Target::Rule(ROOT.to_string()),
            NodeKind::End => Target::End,
            _ if targets.contains_key(node.id.as_str()) => continue,
            _ => Target::Rule(claim_unique_name(&format!("_rule{index}"), &mut claimed)),
        };
        targets.insert(node.id.as_str(), target);
    }

    targets
}
