//! Partial-match simulation over a shared automaton.

mod matcher;
mod namespace;

#[cfg(test)]
mod matcher_tests;

pub use matcher::Matcher;
pub use namespace::Namespace;
