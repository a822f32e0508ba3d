#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared data structures of the trellis regex engine.
//!
//! - `Graph`: node arena and link-list construction with character-map merging
//! - `Automaton`: the graph of a whole pattern set, entered through two gates
//! - `CharClass`: POSIX class predicates
//! - `Tracer`: instrumentation hooks used by the compiler and the matcher

mod automaton;
mod class;
mod colors;
mod dump;
mod graph;
mod node;
mod record;
mod trace;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod graph_tests;

pub use automaton::{Automaton, Checkpoint};
pub use class::CharClass;
pub use colors::Colors;
pub use graph::Graph;
pub use node::{
    CharMap, Complement, Links, Loop, LoopId, LoopStep, Node, NodeId, NodeKind, Optional,
    PatternId,
};
pub use record::MatchRecord;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
