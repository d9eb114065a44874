use std::path::PathBuf;

use gramflow_compiler::validate;

use super::graph_loader::load_or_exit;

pub struct CheckArgs {
    pub graph_path: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let doc = load_or_exit(&args.graph_path);
    let validation = validate(&doc.graph);
    let diagnostics = validation.diagnostics();

    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        validation.is_valid()
    };

    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics.render_colored(args.color));
    }

    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
