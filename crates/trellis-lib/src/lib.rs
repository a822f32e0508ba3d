//! Trellis: streaming multi-pattern regular expressions.
//!
//! Patterns use POSIX extended syntax plus `#` tags, which record the input
//! position they are passed at, and reluctant quantifiers (`*?`, `+?`, `??`,
//! `{m,n}?`). Every pattern added to a [`Pattern`] is matched at once; the
//! leftmost match wins, then the longest, then the one added first.
//!
//! # Example
//!
//! ```
//! use trellis_lib::Pattern;
//!
//! let mut pattern = Pattern::new();
//! pattern.add_pattern("hello$", "anchored").unwrap();
//! pattern.add_pattern("hello", "plain").unwrap();
//!
//! let mut matcher = pattern.matcher();
//! assert!(matcher.add_chunk("hello").is_none());
//! let found = matcher.add_chunk(", world").unwrap();
//! assert_eq!((found.start(), found.end()), (0, 5));
//! assert_eq!(*found.value(), "plain");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod matcher;
mod pattern;

#[cfg(test)]
mod matcher_tests;
#[cfg(test)]
mod tests;

pub use matcher::{Match, Matcher};
pub use pattern::Pattern;

pub use trellis_compiler::{CompileOptions, ParseError, ParseErrorKind, Span, escape};
pub use trellis_core::{Colors, MatchRecord, NoopTracer, PatternId, PrintTracer, Tracer, Verbosity};
