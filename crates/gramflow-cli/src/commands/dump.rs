use std::path::PathBuf;

use gramflow_compiler::{Compiler, Error};
use gramflow_core::Colors;

use super::graph_loader::load_or_exit;

pub struct DumpArgs {
    pub graph_path: PathBuf,
    pub optimize: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let doc = load_or_exit(&args.graph_path);

    let compilation = match Compiler::new(&doc.graph).optimize(args.optimize).compile() {
        Ok(compilation) => compilation,
        Err(Error::InvalidGraph(diagnostics)) => {
            eprintln!("{}", diagnostics.render_colored(args.color));
            std::process::exit(1);
        }
    };

    let colors = Colors::new(args.color);
    let header = |title: &str| println!("{}; {}{}", colors.dim, title, colors.reset);

    header("synthesized rules");
    println!("{}", compilation.synthesized());

    if args.optimize {
        let stats = compilation.stats();
        println!();
        header(&format!(
            "optimized rules ({} inlined, {} merged, {} mentions inlined, {} passes)",
            stats.references_inlined, stats.rules_merged, stats.mentions_inlined, stats.passes
        ));
        println!("{}", compilation.rules());
    }

    println!();
    header("grammar");
    println!("{}", compilation.grammar().render(colors));
}
