//! Instrumentation hooks for compilation and matching.
//!
//! Engine code is generic over [`Tracer`] and defaults to [`NoopTracer`],
//! whose methods are empty and `#[inline(always)]`, so an untraced build
//! carries no tracing cost. Tracing state lives in the tracer only; nothing
//! in the graph or the matcher depends on it.

use crate::automaton::Automaton;
use crate::colors::Colors;
use crate::node::{Node, NodeId, PatternId};
use crate::record::MatchRecord;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Compiled patterns, finalization passes, match candidates and results.
    #[default]
    Default,
    /// Adds input characters and the life cycle of partial matches.
    Verbose,
    /// Adds every visited node and a graph dump per compiled pattern.
    VeryVerbose,
}

/// Hooks called by the compiler and the matcher.
///
/// Positions are character offsets into the input; `start` identifies a
/// partial match by the position it started at.
pub trait Tracer {
    /// After a pattern compiled and was connected to the gates.
    fn trace_compiled(&mut self, pattern: PatternId, source: &str, automaton: &Automaton);

    /// Before `ch` at `pos` is fed to the live partial matches.
    fn trace_char(&mut self, pos: usize, ch: char);

    /// A new partial match begins at `start`.
    fn trace_partial(&mut self, start: usize);

    /// Partial matches from `start` on cannot beat the current best match.
    fn trace_pruned(&mut self, start: usize);

    /// The partial match from `start` has no live nodes left.
    fn trace_exhausted(&mut self, start: usize);

    /// A node is expanded on behalf of the partial match from `start`.
    fn trace_node(&mut self, start: usize, id: NodeId, node: &Node);

    /// A match was reached behind a transition that still needs the next
    /// character, so it is kept for later instead of recorded.
    fn trace_deferred(&mut self, start: usize, pattern: PatternId);

    /// A finalization pass begins. `last` is set for end of input.
    fn trace_finalize(&mut self, pos: usize, last: bool);

    /// A complete match was compared against the current best.
    fn trace_candidate(&mut self, candidate: &MatchRecord, accepted: bool);

    /// The matcher produced its answer.
    fn trace_resolved(&mut self, result: Option<&MatchRecord>);
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_compiled(&mut self, _pattern: PatternId, _source: &str, _automaton: &Automaton) {}

    #[inline(always)]
    fn trace_char(&mut self, _pos: usize, _ch: char) {}

    #[inline(always)]
    fn trace_partial(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_pruned(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_exhausted(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_node(&mut self, _start: usize, _id: NodeId, _node: &Node) {}

    #[inline(always)]
    fn trace_deferred(&mut self, _start: usize, _pattern: PatternId) {}

    #[inline(always)]
    fn trace_finalize(&mut self, _pos: usize, _last: bool) {}

    #[inline(always)]
    fn trace_candidate(&mut self, _candidate: &MatchRecord, _accepted: bool) {}

    #[inline(always)]
    fn trace_resolved(&mut self, _result: Option<&MatchRecord>) {}
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn trace_compiled(&mut self, pattern: PatternId, source: &str, automaton: &Automaton) {
        (**self).trace_compiled(pattern, source, automaton);
    }

    fn trace_char(&mut self, pos: usize, ch: char) {
        (**self).trace_char(pos, ch);
    }

    fn trace_partial(&mut self, start: usize) {
        (**self).trace_partial(start);
    }

    fn trace_pruned(&mut self, start: usize) {
        (**self).trace_pruned(start);
    }

    fn trace_exhausted(&mut self, start: usize) {
        (**self).trace_exhausted(start);
    }

    fn trace_node(&mut self, start: usize, id: NodeId, node: &Node) {
        (**self).trace_node(start, id, node);
    }

    fn trace_deferred(&mut self, start: usize, pattern: PatternId) {
        (**self).trace_deferred(start, pattern);
    }

    fn trace_finalize(&mut self, pos: usize, last: bool) {
        (**self).trace_finalize(pos, last);
    }

    fn trace_candidate(&mut self, candidate: &MatchRecord, accepted: bool) {
        (**self).trace_candidate(candidate, accepted);
    }

    fn trace_resolved(&mut self, result: Option<&MatchRecord>) {
        (**self).trace_resolved(result);
    }
}

/// Tracer that collects formatted lines.
#[derive(Clone, Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn output(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    fn push(&mut self, level: Verbosity, line: String) {
        if self.enabled(level) {
            self.lines.push(line);
        }
    }

    fn format_record(&self, record: &MatchRecord) -> String {
        let c = self.colors;
        let tags: Vec<String> = record.tags.iter().map(|t| t.to_string()).collect();
        format!(
            "{}#{}{} {}[{}, {}){} tags ({})",
            c.blue,
            record.pattern.0,
            c.reset,
            c.dim,
            record.start,
            record.end,
            c.reset,
            tags.join(", ")
        )
    }
}

fn node_label(node: &Node) -> &'static str {
    match node {
        Node::Match(_) => "Match",
        Node::Gate(_) => "Gate",
        Node::StartAnchor(_) => "^",
        Node::Tag(_) => "#",
        Node::Optional(_) => "Optional",
        Node::Loop(_) => "Loop",
        Node::LoopExit { .. } => "Exit",
        Node::EndAnchor(_) => "$",
        Node::CharMap(_) => "Map",
        Node::Class { .. } => "Class",
        Node::Complement(_) => "Complement",
    }
}

impl Tracer for PrintTracer {
    fn trace_compiled(&mut self, pattern: PatternId, source: &str, automaton: &Automaton) {
        let c = self.colors;
        self.push(
            Verbosity::Default,
            format!("compiled {}#{}{} {:?}", c.blue, pattern.0, c.reset, source),
        );
        if self.enabled(Verbosity::VeryVerbose) {
            let dump = automaton.dump_with(c);
            self.lines.extend(dump.lines().map(|line| format!("  {line}")));
        }
    }

    fn trace_char(&mut self, pos: usize, ch: char) {
        let c = self.colors;
        self.push(
            Verbosity::Verbose,
            format!("{}@{pos}{} {}", c.dim, c.reset, c.char(ch)),
        );
    }

    fn trace_partial(&mut self, start: usize) {
        self.push(Verbosity::Verbose, format!("  + partial @{start}"));
    }

    fn trace_pruned(&mut self, start: usize) {
        self.push(Verbosity::Verbose, format!("  pruned from @{start}"));
    }

    fn trace_exhausted(&mut self, start: usize) {
        self.push(Verbosity::Verbose, format!("  - exhausted @{start}"));
    }

    fn trace_node(&mut self, start: usize, id: NodeId, node: &Node) {
        let c = self.colors;
        self.push(
            Verbosity::VeryVerbose,
            format!("    @{start} {} {}", c.node(id), node_label(node)),
        );
    }

    fn trace_deferred(&mut self, start: usize, pattern: PatternId) {
        let c = self.colors;
        self.push(
            Verbosity::Verbose,
            format!("  deferred {}#{}{} @{start}", c.blue, pattern.0, c.reset),
        );
    }

    fn trace_finalize(&mut self, pos: usize, last: bool) {
        let what = if last { "end of input" } else { "end of chunk" };
        self.push(Verbosity::Default, format!("{what} @{pos}"));
    }

    fn trace_candidate(&mut self, candidate: &MatchRecord, accepted: bool) {
        let verdict = if accepted { "best" } else { "rejected" };
        let line = format!("  match {} {verdict}", self.format_record(candidate));
        self.push(Verbosity::Default, line);
    }

    fn trace_resolved(&mut self, result: Option<&MatchRecord>) {
        let line = match result {
            Some(record) => format!("resolved {}", self.format_record(record)),
            None => "resolved: no match".to_string(),
        };
        self.push(Verbosity::Default, line);
    }
}
