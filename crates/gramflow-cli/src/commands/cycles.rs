use std::path::PathBuf;

use gramflow_compiler::{EdgeStyle, FeedbackAnalysis, find_feedback_edges};
use gramflow_core::Graph;
use serde::Serialize;

use super::graph_loader::load_or_exit;

pub struct CyclesArgs {
    pub graph_path: PathBuf,
    pub compact: bool,
}

/// Analysis plus the drawing style of every edge, in edge order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclesReport {
    #[serde(flatten)]
    analysis: FeedbackAnalysis,
    edges: Vec<EdgeReport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeReport {
    key: String,
    style: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path_length: Option<usize>,
}

impl CyclesReport {
    pub fn new(graph: &Graph) -> Self {
        let analysis = find_feedback_edges(graph);
        let edges = graph
            .edges()
            .iter()
            .map(|edge| match analysis.style(edge) {
                EdgeStyle::SelfConnecting { path_length } => EdgeReport {
                    key: edge.key().as_str().to_string(),
                    style: "selfconnecting",
                    path_length: Some(path_length),
                },
                EdgeStyle::SmoothStep => EdgeReport {
                    key: edge.key().as_str().to_string(),
                    style: "smoothstep",
                    path_length: None,
                },
            })
            .collect();

        Self { analysis, edges }
    }
}

pub fn run(args: CyclesArgs) {
    let doc = load_or_exit(&args.graph_path);
    let report = CyclesReport::new(&doc.graph);

    let json = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
