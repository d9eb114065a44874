//! Compilation pipeline: validate, synthesize, optimize, emit.

use gramflow_core::Graph;

use crate::analyze::{Validation, validate};
use crate::diagnostics::Diagnostics;
use crate::emit::{Grammar, emit};
use crate::optimize::{OptimizeStats, optimize};
use crate::rules::{RuleSet, synthesize};
use crate::{Error, Result};

/// Compilation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileConfig {
    /// Run the rule rewriter before emission.
    pub optimize: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self { optimize: true }
    }
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optimize(mut self, enabled: bool) -> Self {
        self.optimize = enabled;
        self
    }
}

/// Graph compiler.
///
/// ```
/// use gramflow_core::{Graph, Node};
/// use gramflow_compiler::Compiler;
///
/// let graph = Graph::builder()
///     .node(Node::start("start"))
///     .node(Node::literal("a", "a"))
///     .node(Node::end("end"))
///     .path(&["start", "a", "end"])
///     .build();
///
/// let compilation = Compiler::new(&graph).compile().expect("valid graph");
/// assert_eq!(compilation.grammar().to_string(), r#"root ::= "a""#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'g> {
    graph: &'g Graph,
    config: CompileConfig,
}

impl<'g> Compiler<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            config: CompileConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    pub fn optimize(mut self, enabled: bool) -> Self {
        self.config.optimize = enabled;
        self
    }

    pub fn config(&self) -> CompileConfig {
        self.config
    }

    /// Run the pipeline.
    ///
    /// Fails with [`Error::InvalidGraph`] before any rule is built when
    /// validation reports an error.
    pub fn compile(&self) -> Result<Compilation> {
        let validation = validate(self.graph);
        if !validation.is_valid() {
            return Err(Error::InvalidGraph(validation.into_diagnostics()));
        }

        let synthesized = synthesize(self.graph);
        let mut rules = synthesized.clone();
        let stats = if self.config.optimize {
            optimize(&mut rules)
        } else {
            OptimizeStats::default()
        };
        let grammar = emit(&rules);

        Ok(Compilation {
            validation,
            synthesized,
            rules,
            stats,
            grammar,
        })
    }
}

/// Everything a successful compilation produced.
#[derive(Debug, Clone)]
pub struct Compilation {
    validation: Validation,
    synthesized: RuleSet,
    rules: RuleSet,
    stats: OptimizeStats,
    grammar: Grammar,
}

impl Compilation {
    /// Warnings from validation. Never contains errors.
    pub fn diagnostics(&self) -> &Diagnostics {
        self.validation.diagnostics()
    }

    /// Rules as synthesized from the graph, before optimization.
    pub fn synthesized(&self) -> &RuleSet {
        &self.synthesized
    }

    /// Rules that were emitted.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn stats(&self) -> OptimizeStats {
        self.stats
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn into_grammar(self) -> Grammar {
        self.grammar
    }
}
