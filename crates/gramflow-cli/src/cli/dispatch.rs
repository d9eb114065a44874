//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::cycles::CyclesArgs;
use crate::commands::dump::DumpArgs;

pub struct CheckParams {
    pub graph_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: graph_path(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            graph_path: p.graph_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompileParams {
    pub graph_path: PathBuf,
    pub output: Option<PathBuf>,
    pub no_optimize: bool,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: graph_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            no_optimize: m.get_flag("no_optimize"),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            graph_path: p.graph_path,
            // Files never get escape codes.
            color: p.output.is_none() && p.color.should_colorize(),
            output: p.output,
            optimize: !p.no_optimize,
        }
    }
}

pub struct DumpParams {
    pub graph_path: PathBuf,
    pub no_optimize: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: graph_path(m),
            no_optimize: m.get_flag("no_optimize"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            graph_path: p.graph_path,
            optimize: !p.no_optimize,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CyclesParams {
    pub graph_path: PathBuf,
    pub compact: bool,
}

impl CyclesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: graph_path(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<CyclesParams> for CyclesArgs {
    fn from(p: CyclesParams) -> Self {
        Self {
            graph_path: p.graph_path,
            compact: p.compact,
        }
    }
}

/// The graph positional is required, so clap guarantees it is present.
fn graph_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("graph_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
