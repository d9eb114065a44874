use gramflow_core::Node;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_node(DiagnosticKind::MissingIncoming, &Node::literal("a", "x"))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "node has no incoming connection");
    assert_eq!(diag.node().unwrap().display_name, "String Match");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DanglingEdge)
        .message("ghost")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "edge references missing node `ghost`");
}

#[test]
fn warnings_do_not_count_as_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::MissingStart).emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn counts_mixed_severities() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_node(DiagnosticKind::Disconnected, &Node::new("r", gramflow_core::NodeKind::Router))
        .emit();
    diagnostics.report(DiagnosticKind::DanglingEdge).emit();
    diagnostics
        .report_node(DiagnosticKind::EndWithoutIncoming, &Node::end("end"))
        .emit();

    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn extend_appends_in_order() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::MissingStart).emit();
    let mut b = Diagnostics::new();
    b.report_node(DiagnosticKind::StartWithoutOutgoing, &Node::start("s"))
        .emit();

    a.extend(b);

    let kinds: Vec<_> = a.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::MissingStart, DiagnosticKind::StartWithoutOutgoing]
    );
}

#[test]
fn render_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_node(
            DiagnosticKind::MissingOutgoing,
            &Node::literal("n1", "x").named("Greeting"),
        )
        .hint("connect it to the end node")
        .emit();
    diagnostics.report(DiagnosticKind::MissingStart).emit();

    insta::assert_snapshot!(diagnostics.render(), @r"
    error: node has no outgoing connection
      --> Greeting (node `n1`)
      = hint: connect it to the end node

    warning: graph has no start node
    ");
}

#[test]
fn render_colored_wraps_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::MissingStart).emit();

    let out = diagnostics.render_colored(true);
    assert!(out.starts_with("\x1b[33mwarning\x1b[0m"));
    assert_eq!(diagnostics.render_colored(false), diagnostics.render());
}

#[test]
fn message_display() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report_node(DiagnosticKind::EndWithoutIncoming, &Node::end("end").named("done"))
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(diag.to_string(), @"error at End (`end`): end node has no incoming connection");
}

#[test]
fn empty_renders_nothing() {
    assert_eq!(Diagnostics::new().render(), "");
}
