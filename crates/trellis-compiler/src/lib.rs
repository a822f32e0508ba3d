#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Trellis pattern compiler.
//!
//! - `parser`: pattern text to parse tree
//! - `compile`: parse tree to node graph, spliced into a shared `Automaton`
//!
//! Syntax is POSIX extended regular expressions plus `#` (record the current
//! position as a tag) and reluctant quantifiers (`*?`, `+?`, `??`, `{m,n}?`).

pub mod compile;
mod error;
mod escape;
mod options;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use compile::compile;
pub use error::{ParseError, ParseErrorKind, Span};
pub use escape::escape;
pub use options::CompileOptions;
