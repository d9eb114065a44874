//! Rule-set optimization.
//!
//! Three rewrites shrink the synthesized rule set:
//! - `inline::inline_single_reference` - fold a rule into its only mentioner
//!   when that mentioner has no other successor
//! - `merge::merge_identical` - collapse rules with equal intrinsic and successors
//! - `inline::inline_single_mentioner` - replace the only mention of a rule with
//!   its intrinsic when the rule's successors are already the mentioner's
//!
//! The first two run to a fixpoint before the third is tried once; any
//! rewrite restarts the outer loop. Every rewrite deletes a rule, so the
//! loop runs at most once per initial rule. `root` is never rewritten away.

mod inline;
mod merge;

#[cfg(test)]
mod optimize_tests;

use crate::rules::{ROOT, RuleSet};

pub use inline::{inline_single_mentioner, inline_single_reference};
pub use merge::merge_identical;

/// Statistics from a full optimization run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeStats {
    pub references_inlined: usize,
    pub rules_merged: usize,
    pub mentions_inlined: usize,
    /// Outer passes, including the final pass that changed nothing.
    pub passes: usize,
}

impl OptimizeStats {
    pub fn rewrites(&self) -> usize {
        self.references_inlined + self.rules_merged + self.mentions_inlined
    }
}

/// Rewrite `rules` until no rewrite applies.
pub fn optimize(rules: &mut RuleSet) -> OptimizeStats {
    let mut stats = OptimizeStats::default();
    let initial = rules.len();

    loop {
        stats.passes += 1;
        let mut changed = false;

        loop {
            if inline_single_reference(rules) {
                stats.references_inlined += 1;
            } else if merge_identical(rules) {
                stats.rules_merged += 1;
            } else {
                break;
            }
            changed = true;
        }

        if inline_single_mentioner(rules) {
            stats.mentions_inlined += 1;
            changed = true;
        }

        if !changed {
            break;
        }
    }

    tracing::debug!(
        before = initial,
        after = rules.len(),
        passes = stats.passes,
        "optimized rules"
    );
    stats
}

/// Non-root rules mentioned exactly once, paired with their mentioner.
///
/// Rules whose only mention is their own successor list are skipped.
fn single_mentions(rules: &RuleSet) -> Vec<(String, String)> {
    rules
        .reference_counts()
        .into_iter()
        .filter(|&(name, count)| count == 1 && name != ROOT && rules.contains(name))
        .filter_map(|(name, _)| {
            let mentioner = rules.first_mentioner(name)?;
            (mentioner.name != name).then(|| (name.to_string(), mentioner.name.clone()))
        })
        .collect()
}
