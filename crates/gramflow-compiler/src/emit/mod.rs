//! Grammar emission from an optimized rule set.

mod emitter;


pub use emitter::{Grammar, GrammarRule, emit};
