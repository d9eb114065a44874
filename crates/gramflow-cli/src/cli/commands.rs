//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gramflow")
        .about("Compile node graphs into GBNF grammars")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(compile_command())
        .subcommand(dump_command())
        .subcommand(cycles_command())
}

/// Validate a graph.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a graph without compiling it")
        .after_help(
            r#"EXAMPLES:
  gramflow check grammar.json            # report unconnected nodes
  gramflow check grammar.json --strict   # fail on warnings too
  cat grammar.json | gramflow check -    # read from stdin"#,
        )
        .arg(graph_path_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Compile a graph to GBNF.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile a graph into a GBNF grammar")
        .after_help(
            r#"EXAMPLES:
  gramflow compile grammar.json                 # print to stdout
  gramflow compile grammar.json -o out.gbnf     # write to file
  gramflow compile grammar.json -o grammars/    # write <name>.gbnf into directory
  gramflow compile grammar.json --no-optimize   # one rule per node"#,
        )
        .arg(graph_path_arg())
        .arg(output_arg())
        .arg(no_optimize_arg())
        .arg(color_arg())
}

/// Show intermediate rule sets.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show synthesized and optimized rules")
        .after_help(
            r#"EXAMPLES:
  gramflow dump grammar.json
  gramflow dump grammar.json --no-optimize"#,
        )
        .arg(graph_path_arg())
        .arg(no_optimize_arg())
        .arg(color_arg())
}

/// Report feedback edges.
pub fn cycles_command() -> Command {
    Command::new("cycles")
        .about("Report feedback edges and cycle lengths as JSON")
        .after_help(
            r#"EXAMPLES:
  gramflow cycles grammar.json
  gramflow cycles grammar.json --compact"#,
        )
        .arg(graph_path_arg())
        .arg(compact_arg())
}
