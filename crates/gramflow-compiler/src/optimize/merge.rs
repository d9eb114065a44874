use crate::rules::{RuleSet, Successor};

/// Merge the first pair of non-root rules with identical intrinsic and
/// successor list.
///
/// References to the later rule are repointed at the earlier one and the
/// later rule is removed. Returns `true` if a pair was merged.
pub fn merge_identical(rules: &mut RuleSet) -> bool {
    let Some((keep, drop)) = find_identical_pair(rules) else {
        return false;
    };

    rules.remove(&drop);
    for rule in rules.iter_mut() {
        for successor in &mut rule.successors {
            if successor.references(&drop) {
                *successor = Successor::Rule(keep.clone());
            }
        }
    }

    tracing::debug!(rule = %drop, into = %keep, "merged identical rules");
    true
}

fn find_identical_pair(rules: &RuleSet) -> Option<(String, String)> {
    let candidates: Vec<_> = rules.iter().filter(|r| !r.is_root()).collect();
    for (i, first) in candidates.iter().enumerate() {
        for second in &candidates[i + 1..] {
            if first.intrinsic == second.intrinsic && first.successors == second.successors {
                return Some((first.name.clone(), second.name.clone()));
            }
        }
    }
    None
}
