use std::collections::HashSet;

use crate::utils::{
    claim_unique_name, escape_literal, export_file_name, normalize_identifier, unescape_literal,
};

#[test]
fn normalize_lowercases_and_replaces() {
    assert_eq!(normalize_identifier("Greeting"), "greeting");
    assert_eq!(normalize_identifier("first-name"), "first_name");
    assert_eq!(normalize_identifier("a.b c"), "a_b_c");
    assert_eq!(normalize_identifier("snake_case_9"), "snake_case_9");
}

#[test]
fn normalize_prefixes_leading_digit() {
    assert_eq!(normalize_identifier("1st"), "_1st");
    assert_eq!(normalize_identifier("42"), "_42");
}

#[test]
fn normalize_replaces_non_ascii() {
    assert_eq!(normalize_identifier("café"), "caf_");
}

#[test]
fn unique_name_appends_smallest_free_suffix() {
    let mut claimed: HashSet<String> = ["x".to_string(), "x2".to_string()].into();

    assert_eq!(claim_unique_name("x", &mut claimed), "x1");
    assert_eq!(claim_unique_name("x", &mut claimed), "x3");
    assert_eq!(claim_unique_name("y", &mut claimed), "y");
    assert!(claimed.contains("x1"));
    assert!(claimed.contains("x3"));
}

#[test]
fn escape_handles_special_characters() {
    assert_eq!(escape_literal(r#"say "hi""#), r#"say \"hi\""#);
    assert_eq!(escape_literal("a\\b"), "a\\\\b");
    assert_eq!(escape_literal("line\nnext\r\tend"), "line\\nnext\\r\\tend");
    assert_eq!(escape_literal("plain"), "plain");
}

#[test]
fn unescape_inverts_escape() {
    for raw in ["", "plain", "q\"uote", "back\\slash", "multi\nline\ttab\r", "\\n literal"] {
        assert_eq!(unescape_literal(&escape_literal(raw)), raw);
    }
}

#[test]
fn unescape_keeps_unknown_sequences() {
    assert_eq!(unescape_literal(r"\x41"), r"\x41");
    assert_eq!(unescape_literal("trailing\\"), "trailing\\");
}

#[test]
fn export_file_name_from_document_name() {
    assert_eq!(export_file_name(Some("Chat Reply")), "chat_reply.gbnf");
    assert_eq!(export_file_name(Some("v2-format")), "v2_format.gbnf");
    assert_eq!(export_file_name(Some("")), "grammar.gbnf");
    assert_eq!(export_file_name(None), "grammar.gbnf");
}
