use gramflow_core::{Graph, Node, NodeKind};

use super::cycles::CyclesReport;

#[test]
fn report_lists_every_edge_style() {
    let graph = Graph::builder()
        .node(Node::start("start"))
        .node(Node::new("x", NodeKind::Letter).at(300.0, 0.0))
        .node(Node::end("end").at(600.0, 0.0))
        .path(&["start", "x", "end"])
        .edge("x", "x")
        .build();

    let json = serde_json::to_string(&CyclesReport::new(&graph)).unwrap();

    insta::assert_snapshot!(json, @r#"{"feedbackEdges":["x->x"],"pathLengths":{"x->x":1},"edges":[{"key":"start->x","style":"smoothstep"},{"key":"x->end","style":"smoothstep"},{"key":"x->x","style":"selfconnecting","pathLength":1}]}"#);
}

#[test]
fn acyclic_graph_has_no_feedback() {
    let graph = Graph::builder()
        .node(Node::start("start"))
        .node(Node::end("end").at(300.0, 0.0))
        .edge("start", "end")
        .build();

    let json = serde_json::to_string(&CyclesReport::new(&graph)).unwrap();

    insta::assert_snapshot!(json, @r#"{"feedbackEdges":[],"pathLengths":{},"edges":[{"key":"start->end","style":"smoothstep"}]}"#);
}
