//! A compiled set of patterns.

use trellis_compiler::{CompileOptions, ParseError, compile};
use trellis_core::{Automaton, NoopTracer, PatternId, Tracer};

use crate::matcher::{Match, Matcher};

/// Patterns compiled into one shared automaton, each with a value that is
/// handed back when it matches.
///
/// Adding a pattern that fails to compile leaves the set unchanged.
#[derive(Clone, Debug)]
pub struct Pattern<T> {
    automaton: Automaton,
    values: Vec<T>,
    options: CompileOptions,
}

impl<T> Default for Pattern<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pattern<T> {
    pub fn new() -> Self {
        Self::with_options(CompileOptions::default())
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            automaton: Automaton::new(options.get_merge_character_maps()),
            values: Vec::new(),
            options,
        }
    }

    /// A set holding the single pattern `source`.
    pub fn from_pattern(source: &str, value: T) -> Result<Self, ParseError> {
        let mut pattern = Self::new();
        pattern.add_pattern(source, value)?;
        Ok(pattern)
    }

    /// Compiles `source` into the set. Patterns added earlier win ties.
    pub fn add_pattern(&mut self, source: &str, value: T) -> Result<PatternId, ParseError> {
        self.add_pattern_with(source, value, &mut NoopTracer)
    }

    pub fn add_pattern_with<R: Tracer>(
        &mut self,
        source: &str,
        value: T,
        tracer: &mut R,
    ) -> Result<PatternId, ParseError> {
        let id = compile(&mut self.automaton, source, &self.options, tracer)?;
        self.values.push(value);
        Ok(id)
    }

    /// Matches against the whole of `text`.
    pub fn find(&self, text: &str) -> Option<Match<'_, T>> {
        self.matcher().add_final(text)
    }

    /// A fresh streaming matcher. Positions start at 0.
    pub fn matcher(&self) -> Matcher<'_, T> {
        Matcher::new(self)
    }

    pub fn matcher_with<R: Tracer>(&self, tracer: R) -> Matcher<'_, T, R> {
        Matcher::with_tracer(self, tracer)
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, id: PatternId) -> Option<&T> {
        self.values.get(id.index())
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Listing of the compiled graph, one node per line.
    pub fn dump(&self) -> String {
        self.automaton.dump()
    }
}
