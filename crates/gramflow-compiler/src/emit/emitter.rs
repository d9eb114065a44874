//! Grammar text emission.

use std::fmt;

use gramflow_core::Colors;

use crate::rules::{ROOT, Rule, RuleSet, Successor};

/// One `name ::= body` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    pub name: String,
    pub body: String,
}

/// Emitted grammar: `root` first, then the other rules by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<GrammarRule>,
}

impl Grammar {
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&GrammarRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Grammar text with ANSI highlighting.
    pub fn render(&self, colors: Colors) -> String {
        self.rules
            .iter()
            .map(|rule| {
                format!(
                    "{}{}{} {}::={} {}",
                    colors.blue,
                    rule.name,
                    colors.reset,
                    colors.dim,
                    colors.reset,
                    highlight_body(&rule.body, colors)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} ::= {}", rule.name, rule.body)?;
        }
        Ok(())
    }
}

/// Serialize `rules` into a grammar.
///
/// Rules whose body renders empty are omitted.
pub fn emit(rules: &RuleSet) -> Grammar {
    let mut lines: Vec<GrammarRule> = rules
        .iter()
        .map(|rule| GrammarRule {
            name: rule.name.clone(),
            body: rule_body(rule),
        })
        .filter(|line| !line.body.is_empty())
        .collect();

    lines.sort_by(|a, b| {
        (a.name != ROOT)
            .cmp(&(b.name != ROOT))
            .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
    });

    tracing::debug!(rules = lines.len(), "emitted grammar");
    Grammar { rules: lines }
}

fn rule_body(rule: &Rule) -> String {
    format!("{} {}", rule.intrinsic, successor_group(&rule.successors))
        .trim()
        .to_string()
}

/// Render a successor list as a choice.
///
/// End markers do not render; dropping one makes the group optional.
fn successor_group(successors: &[Successor]) -> String {
    let entries: Vec<String> = successors
        .iter()
        .filter_map(|s| match s {
            Successor::Rule(name) => Some(name.clone()),
            Successor::Inline(intrinsic) => Some(inline_fragment(intrinsic)),
            Successor::End => None,
        })
        .collect();

    let group = match entries.as_slice() {
        [] => return String::new(),
        [single] => single.clone(),
        many => format!("({})", many.join(" | ")),
    };

    if entries.len() == successors.len() {
        group
    } else if is_atom(&group) {
        format!("{group}?")
    } else {
        format!("({group})?")
    }
}

fn inline_fragment(intrinsic: &str) -> String {
    if !intrinsic.is_empty() && is_atom(intrinsic) {
        intrinsic.to_string()
    } else {
        format!("({intrinsic})")
    }
}

/// Whether `text` is one grammar term that a postfix operator binds to as a whole.
///
/// Atoms are rule names, a single quoted literal, a single bracket class,
/// or a single parenthesized group.
pub(crate) fn is_atom(text: &str) -> bool {
    match text.as_bytes().first() {
        None => false,
        Some(b'"' | b'[' | b'(') => closing_index(text) == Some(text.len() - 1),
        Some(_) => text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
    }
}

/// Byte index of the delimiter closing the one that opens `text`.
///
/// Backslash escapes are skipped. Inside parentheses, nested groups,
/// quoted literals and bracket classes are skipped as units.
fn closing_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let close = match bytes.first()? {
        b'"' => b'"',
        b'[' => b']',
        b'(' => b')',
        _ => return None,
    };

    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b if b == close => return Some(i),
            b'"' | b'[' | b'(' if close == b')' => i += closing_index(&text[i..])?,
            _ => {}
        }
        i += 1;
    }
    None
}

/// Color quoted literals and operators in a rule body.
fn highlight_body(body: &str, colors: Colors) -> String {
    if !colors.is_enabled() {
        return body.to_string();
    }

    let mut out = String::with_capacity(body.len());
    let mut in_literal = false;
    let mut escaped = false;
    for c in body.chars() {
        if in_literal {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_literal = false;
                out.push_str(colors.reset);
            }
            continue;
        }
        match c {
            '"' => {
                in_literal = true;
                out.push_str(colors.green);
                out.push(c);
            }
            '|' | '(' | ')' | '?' | '*' | '+' => {
                out.push_str(colors.dim);
                out.push(c);
                out.push_str(colors.reset);
            }
            _ => out.push(c),
        }
    }
    if in_literal {
        out.push_str(colors.reset);
    }
    out
}
