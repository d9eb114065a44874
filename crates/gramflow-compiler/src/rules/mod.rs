//! Grammar rules built from graph nodes.
//!
//! One [`Rule`] per non-end node, keyed by a unique name. A rule is its
//! node's intrinsic pattern followed by a choice among its successors.

mod synthesize;


use std::fmt;

use indexmap::IndexMap;

pub use synthesize::{intrinsic_pattern, synthesize};

/// Name of the rule produced by the start node.
pub const ROOT: &str = "root";

/// One entry in a rule's successor list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Successor {
    /// Reference to another rule by name.
    Rule(String),
    /// The path may end here.
    End,
    /// A rule folded into its mentioner. Holds that rule's intrinsic.
    Inline(String),
}

impl Successor {
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Self::Rule(name) => Some(name),
            Self::End | Self::Inline(_) => None,
        }
    }

    pub fn references(&self, name: &str) -> bool {
        self.rule_name() == Some(name)
    }
}

impl fmt::Display for Successor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(name) => f.write_str(name),
            Self::End => f.write_str("<end>"),
            Self::Inline(intrinsic) => write!(f, "<inline {intrinsic}>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub intrinsic: String,
    pub successors: Vec<Successor>,
}

impl Rule {
    pub fn new(name: impl Into<String>, intrinsic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intrinsic: intrinsic.into(),
            successors: Vec::new(),
        }
    }

    pub fn with_successors(mut self, successors: impl IntoIterator<Item = Successor>) -> Self {
        self.successors.extend(successors);
        self
    }

    pub fn is_root(&self) -> bool {
        self.name == ROOT
    }
}

/// Rules keyed by name, in synthesis order.
///
/// Owned by a single compilation; the optimizer rewrites it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: IndexMap<String, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `rule`, replacing any rule of the same name in place.
    pub fn insert(&mut self, rule: Rule) {
        self.rules.insert(rule.name.clone(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Rule> {
        self.rules.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Remove a rule, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Rule> {
        self.rules.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Rule> {
        self.rules.values_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of successor entries naming each rule. Duplicates count.
    pub fn reference_counts(&self) -> IndexMap<&str, usize> {
        let mut counts: IndexMap<&str, usize> = self.names().map(|n| (n, 0)).collect();
        for rule in self.iter() {
            for name in rule.successors.iter().filter_map(Successor::rule_name) {
                *counts.entry(name).or_insert(0) += 1;
            }
        }
        counts
    }

    /// First rule, in order, with a successor naming `name`.
    pub fn first_mentioner(&self, name: &str) -> Option<&Rule> {
        self.iter()
            .find(|rule| rule.successors.iter().any(|s| s.references(name)))
    }
}

/// Debug listing used by `gramflow dump`.
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let intrinsic = if rule.intrinsic.is_empty() {
                "ε"
            } else {
                rule.intrinsic.as_str()
            };
            write!(f, "{} = {}", rule.name, intrinsic)?;
            if !rule.successors.is_empty() {
                let successors: Vec<String> =
                    rule.successors.iter().map(ToString::to_string).collect();
                write!(f, " -> {}", successors.join(", "))?;
            }
        }
        Ok(())
    }
}
