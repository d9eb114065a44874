use crate::rules::{RuleSet, Successor};

use super::single_mentions;

/// Fold a singly-referenced rule into a mentioner whose only successor it is.
///
/// The mentioner takes over the rule's successors and appends its
/// intrinsic. Returns `true` if a rule was removed.
pub fn inline_single_reference(rules: &mut RuleSet) -> bool {
    for (name, mentioner) in single_mentions(rules) {
        let sole_successor = rules
            .get(&mentioner)
            .is_some_and(|m| m.successors.len() == 1);
        if !sole_successor {
            continue;
        }

        let Some(inlined) = rules.remove(&name) else {
            continue;
        };
        if let Some(m) = rules.get_mut(&mentioner) {
            m.intrinsic = format!("{} {}", m.intrinsic, inlined.intrinsic)
                .trim()
                .to_string();
            m.successors = inlined.successors;
        }

        tracing::debug!(rule = %name, into = %mentioner, "inlined single reference");
        return true;
    }
    false
}

/// Replace the only mention of a rule with an inline copy of its intrinsic.
///
/// Applies only when every successor of the rule already appears among the
/// mentioner's successors. Returns `true` if a rule was removed.
pub fn inline_single_mentioner(rules: &mut RuleSet) -> bool {
    for (name, mentioner) in single_mentions(rules) {
        let (Some(rule), Some(m)) = (rules.get(&name), rules.get(&mentioner)) else {
            continue;
        };
        if !rule.successors.iter().all(|s| m.successors.contains(s)) {
            continue;
        }

        let fragment = Successor::Inline(rule.intrinsic.clone());
        rules.remove(&name);
        if let Some(m) = rules.get_mut(&mentioner) {
            for successor in &mut m.successors {
                if successor.references(&name) {
                    *successor = fragment.clone();
                }
            }
        }

        tracing::debug!(rule = %name, into = %mentioner, "inlined single mention");
        return true;
    }
    false
}
