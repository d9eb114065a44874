use super::{OptimizeStats, inline_single_mentioner, inline_single_reference, merge_identical, optimize};
use crate::rules::{Rule, RuleSet, Successor};

fn to(name: &str) -> Successor {
    Successor::Rule(name.to_string())
}

fn rule_set(rules: impl IntoIterator<Item = Rule>) -> RuleSet {
    let mut set = RuleSet::new();
    for rule in rules {
        set.insert(rule);
    }
    set
}

#[test]
fn chain_collapses_into_root() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a")]),
        Rule::new("a", "\"x\"").with_successors([to("b")]),
        Rule::new("b", "[0-9]").with_successors([Successor::End]),
    ]);

    let stats = optimize(&mut rules);

    insta::assert_snapshot!(rules.to_string(), @r#"root = "x" [0-9] -> <end>"#);
    assert_eq!(stats.references_inlined, 2);
    assert_eq!(stats.rewrites(), 2);
}

#[test]
fn single_reference_needs_sole_successor() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a"), Successor::End]),
        Rule::new("a", "\"x\"").with_successors([Successor::End]),
    ]);

    assert!(!inline_single_reference(&mut rules));
    assert_eq!(rules.len(), 2);
}

#[test]
fn optional_branch_becomes_inline_fragment() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a"), Successor::End]),
        Rule::new("a", "[a-zA-Z]").with_successors([Successor::End]),
    ]);

    let stats = optimize(&mut rules);

    assert_eq!(
        rules.get("root").unwrap().successors,
        vec![Successor::Inline("[a-zA-Z]".to_string()), Successor::End]
    );
    assert_eq!(rules.len(), 1);
    assert_eq!(
        stats,
        OptimizeStats {
            references_inlined: 0,
            rules_merged: 0,
            mentions_inlined: 1,
            passes: 2,
        }
    );
}

#[test]
fn identical_siblings_merge_into_earlier() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("p"), to("q")]),
        Rule::new("p", "\"p\"").with_successors([to("a1"), Successor::End]),
        Rule::new("q", "\"q\"").with_successors([to("a2"), Successor::End]),
        Rule::new("a1", "[a-zA-Z]").with_successors([Successor::End]),
        Rule::new("a2", "[a-zA-Z]").with_successors([Successor::End]),
    ]);

    let stats = optimize(&mut rules);

    insta::assert_snapshot!(rules.to_string(), @r#"
    root = ε -> p, q
    p = "p" -> a1, <end>
    q = "q" -> a1, <end>
    a1 = [a-zA-Z] -> <end>
    "#);
    assert_eq!(stats.rules_merged, 1);
}

#[test]
fn merge_skips_root() {
    let mut rules = rule_set([
        Rule::new("root", "\"x\"").with_successors([Successor::End]),
        Rule::new("x", "\"x\"").with_successors([Successor::End]),
    ]);

    assert!(!merge_identical(&mut rules));
}

#[test]
fn merge_requires_same_successor_order() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a"), to("b")]),
        Rule::new("a", "\"x\"").with_successors([to("b"), Successor::End]),
        Rule::new("b", "\"x\"").with_successors([Successor::End, to("b")]),
    ]);

    assert!(!merge_identical(&mut rules));
}

#[test]
fn root_survives_being_inlined_into() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a")]),
        Rule::new("a", "\"x\"").with_successors([to("root")]),
    ]);

    optimize(&mut rules);

    insta::assert_snapshot!(rules.to_string(), @r#"root = "x" -> root"#);
}

#[test]
fn self_mention_is_not_a_candidate() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([Successor::End]),
        Rule::new("island", "[0-9]").with_successors([to("island")]),
    ]);

    let stats = optimize(&mut rules);

    assert!(rules.contains("island"));
    assert_eq!(stats.rewrites(), 0);
    assert_eq!(stats.passes, 1);
}

#[test]
fn non_subset_mentions_are_left_alone() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a"), to("b")]),
        Rule::new("a", "\"x\"").with_successors([to("c")]),
        Rule::new("b", "\"y\"").with_successors([to("c")]),
        Rule::new("c", "\"z\"").with_successors([Successor::End]),
    ]);
    let before = rules.clone();

    assert!(!inline_single_mentioner(&mut rules));
    let stats = optimize(&mut rules);

    assert_eq!(rules, before);
    assert_eq!(stats.rewrites(), 0);
}

#[test]
fn duplicate_mentions_block_inlining() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("a"), to("a")]),
        Rule::new("a", "\"x\"").with_successors([Successor::End]),
    ]);

    let stats = optimize(&mut rules);

    assert_eq!(rules.len(), 2);
    assert_eq!(stats.rewrites(), 0);
}

#[test]
fn optimize_is_idempotent() {
    let mut rules = rule_set([
        Rule::new("root", "").with_successors([to("p"), to("q"), Successor::End]),
        Rule::new("p", "\"p\"").with_successors([to("d")]),
        Rule::new("q", "\"q\"").with_successors([to("d")]),
        Rule::new("d", "[0-9]").with_successors([to("d"), Successor::End]),
    ]);

    optimize(&mut rules);
    let once = rules.clone();
    let stats = optimize(&mut rules);

    assert_eq!(rules, once);
    assert_eq!(stats.rewrites(), 0);
}
