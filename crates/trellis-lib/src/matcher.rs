//! Streaming matcher and match results.

use std::ops::Range;

use serde::Serialize;
use trellis_core::{MatchRecord, NoopTracer, PatternId, Tracer};

use crate::pattern::Pattern;

/// The winning match of a [`Matcher`].
///
/// Offsets count characters (not bytes) from the start of the first chunk.
#[derive(Debug, Serialize)]
pub struct Match<'p, T> {
    #[serde(flatten)]
    record: MatchRecord,
    value: &'p T,
}

impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            value: self.value,
        }
    }
}

impl<'p, T> Match<'p, T> {
    pub fn start(&self) -> usize {
        self.record.start
    }

    pub fn end(&self) -> usize {
        self.record.end
    }

    pub fn range(&self) -> Range<usize> {
        self.record.range()
    }

    /// Positions recorded by the `#` tags on the winning path, in order.
    pub fn tags(&self) -> &[usize] {
        &self.record.tags
    }

    pub fn value(&self) -> &'p T {
        self.value
    }

    /// Which pattern matched, by declaration order.
    pub fn pattern(&self) -> PatternId {
        self.record.pattern
    }

    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    pub fn into_record(self) -> MatchRecord {
        self.record
    }
}

/// Incremental matcher over a [`Pattern`].
///
/// Feed text with [`add_chunk`](Self::add_chunk) as it arrives and finish
/// with [`add_final`](Self::add_final). After a match is returned the
/// matcher ignores further input; start a new one for the next search.
pub struct Matcher<'p, T, R: Tracer = NoopTracer> {
    pattern: &'p Pattern<T>,
    inner: trellis_vm::Matcher<'p, R>,
}

impl<'p, T> Matcher<'p, T> {
    /// Same as [`Pattern::matcher`].
    pub fn new(pattern: &'p Pattern<T>) -> Self {
        Self::with_tracer(pattern, NoopTracer)
    }
}

impl<'p, T, R: Tracer> Matcher<'p, T, R> {
    /// Matcher reporting to `tracer`. Same as [`Pattern::matcher_with`].
    pub fn with_tracer(pattern: &'p Pattern<T>, tracer: R) -> Self {
        Self {
            pattern,
            inner: trellis_vm::Matcher::with_tracer(pattern.automaton(), tracer),
        }
    }

    /// Feeds `text`, which may be followed by more input.
    ///
    /// Returns `None` while more input could still change the answer.
    pub fn add_chunk(&mut self, text: &str) -> Option<Match<'p, T>> {
        let record = self.inner.add_chunk(text)?;
        self.wrap(record)
    }

    /// Feeds the last piece of input and returns the best match, if any.
    pub fn add_final(self, text: &str) -> Option<Match<'p, T>> {
        let pattern = self.pattern;
        let record = self.inner.add_final(text)?;
        wrap(pattern, record)
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.is_resolved()
    }

    pub fn tracer(&self) -> &R {
        self.inner.tracer()
    }

    fn wrap(&self, record: MatchRecord) -> Option<Match<'p, T>> {
        wrap(self.pattern, record)
    }
}

fn wrap<T>(pattern: &Pattern<T>, record: MatchRecord) -> Option<Match<'_, T>> {
    let value = pattern.value(record.pattern)?;
    Some(Match { record, value })
}
