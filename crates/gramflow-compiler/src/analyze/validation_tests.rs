use gramflow_core::{Graph, Node, NodeKind};

use super::validation::validate;
use crate::diagnostics::DiagnosticKind;

fn kinds(graph: &Graph) -> Vec<DiagnosticKind> {
    validate(graph).diagnostics().iter().map(|d| d.kind()).collect()
}

#[test]
fn linear_path_is_valid() {
    let graph = Graph::builder()
        .node(Node::start("s"))
        .node(Node::literal("a", "a"))
        .node(Node::end("e"))
        .path(&["s", "a", "e"])
        .build();

    let result = validate(&graph);

    assert!(result.is_valid());
    assert!(result.problems().is_empty());
    assert!(result.diagnostics().is_empty());
}

#[test]
fn initial_graph_reports_both_sentinels() {
    let result = validate(&Graph::initial());

    assert!(!result.is_valid());
    assert_eq!(result.problems(), ["Start", "End"]);
}

#[test]
fn sentinels_report_by_label_even_when_named() {
    let graph = Graph::builder()
        .node(Node::start("s").named("root"))
        .node(Node::end("e").named("finish"))
        .build();

    assert_eq!(validate(&graph).problems(), ["Start", "End"]);
}

#[test]
fn interior_nodes_need_both_directions() {
    let graph = Graph::builder()
        .node(Node::start("s"))
        .node(Node::new("only_in", NodeKind::Letter))
        .node(Node::new("only_out", NodeKind::Digit).named("Digits"))
        .node(Node::new("island", NodeKind::Router))
        .node(Node::end("e"))
        .edge("s", "only_in")
        .edge("only_out", "e")
        .build();

    let result = validate(&graph);

    assert_eq!(result.problems(), ["Letter", "Digits", "Router"]);
    assert_eq!(
        kinds(&graph),
        vec![
            DiagnosticKind::MissingOutgoing,
            DiagnosticKind::MissingIncoming,
            DiagnosticKind::Disconnected,
        ]
    );
}

#[test]
fn self_loop_counts_both_ways() {
    let graph = Graph::builder()
        .node(Node::new("x", NodeKind::Letter))
        .edge("x", "x")
        .build();

    let result = validate(&graph);

    assert!(result.problems().is_empty());
    // Only the missing-start warning.
    assert!(result.is_valid());
    assert_eq!(kinds(&graph), vec![DiagnosticKind::MissingStart]);
}

#[test]
fn dangling_edges_warn_without_invalidating() {
    let graph = Graph::builder()
        .node(Node::start("s"))
        .node(Node::end("e"))
        .edge("s", "e")
        .edge("s", "ghost")
        .build();

    let result = validate(&graph);

    assert!(result.is_valid());
    assert!(result.problems().is_empty());
    insta::assert_snapshot!(result.diagnostics().render(), @"warning: edge references missing node `ghost`");
}

#[test]
fn empty_graph_is_valid() {
    let result = validate(&Graph::default());

    assert!(result.is_valid());
    assert!(result.diagnostics().is_empty());
}

#[test]
fn render_reports_node_ids() {
    let graph = Graph::builder()
        .node(Node::start("s"))
        .node(Node::literal("lit", "hi").named("Greeting"))
        .node(Node::end("e"))
        .edge("s", "lit")
        .build();

    insta::assert_snapshot!(validate(&graph).diagnostics().render(), @r"
    error: node has no outgoing connection
      --> Greeting (node `lit`)

    error: end node has no incoming connection
      --> End (node `e`)
    ");
}
