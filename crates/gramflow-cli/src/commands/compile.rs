use std::fs;
use std::path::PathBuf;

use gramflow_compiler::{Compiler, Error};
use gramflow_core::Colors;

use super::graph_loader::{load_or_exit, resolve_output_path};

pub struct CompileArgs {
    pub graph_path: PathBuf,
    pub output: Option<PathBuf>,
    pub optimize: bool,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    let doc = load_or_exit(&args.graph_path);

    let compilation = match Compiler::new(&doc.graph).optimize(args.optimize).compile() {
        Ok(compilation) => compilation,
        Err(Error::InvalidGraph(diagnostics)) => {
            eprintln!("{}", diagnostics.render_colored(args.color));
            std::process::exit(1);
        }
    };

    let warnings = compilation.diagnostics();
    if warnings.has_warnings() {
        eprintln!("{}", warnings.render_colored(args.color));
    }

    let grammar = compilation.grammar();
    if grammar.is_empty() {
        tracing::warn!("grammar has no rules");
    }

    let Some(output) = args.output else {
        println!("{}", grammar.render(Colors::new(args.color)));
        return;
    };

    let path = resolve_output_path(&output, doc.display_name());
    if let Err(e) = fs::write(&path, format!("{grammar}\n")) {
        eprintln!("error: failed to write '{}': {}", path.display(), e);
        std::process::exit(1);
    }
    tracing::info!(rules = grammar.rules().len(), "wrote {}", path.display());
}
