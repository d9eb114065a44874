use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use gramflow_core::utils::export_file_name;
use gramflow_core::{GraphDocument, GraphError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Load an editor document. `-` reads stdin.
pub fn load_document(path: &Path) -> Result<GraphDocument, LoadError> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let doc = GraphDocument::from_json(&json)?;
    tracing::debug!(
        nodes = doc.graph.nodes().len(),
        edges = doc.graph.edges().len(),
        "loaded {}",
        path.display()
    );
    Ok(doc)
}

/// Where `compile -o` writes. A directory receives `<document-name>.gbnf`.
pub fn resolve_output_path(output: &Path, document_name: Option<&str>) -> PathBuf {
    if output.is_dir() {
        output.join(export_file_name(document_name))
    } else {
        output.to_path_buf()
    }
}

/// Load or exit with an error message.
pub fn load_or_exit(path: &Path) -> GraphDocument {
    match load_document(path) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
