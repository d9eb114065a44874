use std::fs;
use std::path::PathBuf;

use indoc::indoc;

use super::graph_loader::{LoadError, load_document, resolve_output_path};

const DOC: &str = indoc! {r#"
    {
      "name": "Yes Or No",
      "nodes": [
        {"id": "start", "type": "startNode", "position": {"x": 0, "y": 0}, "data": {}},
        {"id": "end", "type": "endNode", "position": {"x": 300, "y": 0}, "data": {}}
      ],
      "edges": [{"source": "start", "target": "end"}]
    }
"#};

#[test]
fn loads_document_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("g.json");
    fs::write(&path, DOC).unwrap();

    let doc = load_document(&path).unwrap();

    assert_eq!(doc.display_name(), Some("Yes Or No"));
    assert_eq!(doc.graph.nodes().len(), 2);
    assert_eq!(doc.graph.edges().len(), 1);
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_document(&path).unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_graph_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_document(&path).unwrap_err();

    assert!(matches!(err, LoadError::Graph(_)));
    assert!(err.to_string().starts_with("invalid graph document"));
}

#[test]
fn output_directory_gets_export_name() {
    let dir = tempfile::tempdir().unwrap();

    let path = resolve_output_path(dir.path(), Some("Yes Or No"));

    assert_eq!(path, dir.path().join("yes_or_no.gbnf"));
}

#[test]
fn output_file_used_as_is() {
    let path = resolve_output_path(&PathBuf::from("out/custom.gbnf"), Some("ignored"));

    assert_eq!(path, PathBuf::from("out/custom.gbnf"));
}
