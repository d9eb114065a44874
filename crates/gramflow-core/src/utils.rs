use std::collections::HashSet;

/// Normalize a user-facing name into a grammar rule identifier.
///
/// Lowercases, replaces every character outside `[a-z0-9_]` with `_`, and
/// prefixes `_` when the result would start with a digit.
///
/// # Examples
/// ```
/// use gramflow_core::utils::normalize_identifier;
/// assert_eq!(normalize_identifier("Foo Bar"), "foo_bar");
/// assert_eq!(normalize_identifier("9lives"), "_9lives");
/// ```
pub fn normalize_identifier(name: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' => c,
            _ => '_',
        })
        .collect();

    if normalized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{normalized}")
    } else {
        normalized
    }
}

/// Claim `base`, or `base` followed by the smallest positive integer not yet taken.
///
/// The returned name is inserted into `claimed`.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use gramflow_core::utils::claim_unique_name;
///
/// let mut claimed = HashSet::new();
/// assert_eq!(claim_unique_name("digit", &mut claimed), "digit");
/// assert_eq!(claim_unique_name("digit", &mut claimed), "digit1");
/// assert_eq!(claim_unique_name("digit", &mut claimed), "digit2");
/// ```
pub fn claim_unique_name(base: &str, claimed: &mut HashSet<String>) -> String {
    if claimed.insert(base.to_string()) {
        return base.to_string();
    }

    let mut counter = 1;
    loop {
        let name = format!("{base}{counter}");
        if claimed.insert(name.clone()) {
            return name;
        }
        counter += 1;
    }
}

/// Escape raw text for use inside a double-quoted grammar literal.
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_literal`].
///
/// Unknown escape sequences are kept as written.
pub fn unescape_literal(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// File name for an exported grammar.
///
/// # Examples
/// ```
/// use gramflow_core::utils::export_file_name;
/// assert_eq!(export_file_name(Some("My Grammar")), "my_grammar.gbnf");
/// assert_eq!(export_file_name(None), "grammar.gbnf");
/// ```
pub fn export_file_name(document_name: Option<&str>) -> String {
    match document_name.filter(|n| !n.is_empty()) {
        Some(name) => {
            let stem: String = name
                .to_lowercase()
                .chars()
                .map(|c| match c {
                    'a'..='z' | '0'..='9' | '_' => c,
                    _ => '_',
                })
                .collect();
            format!("{stem}.gbnf")
        }
        None => "grammar.gbnf".to_string(),
    }
}
