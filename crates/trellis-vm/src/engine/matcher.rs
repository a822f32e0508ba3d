//! Incremental matcher over a compiled automaton.

use trellis_core::{Automaton, MatchRecord, Node, NodeId, NodeKind, NoopTracer, Tracer};

use super::namespace::Namespace;

/// A live node together with the state of the branch that reached it.
type Branch = (NodeId, Namespace);

/// All branches of one candidate match start, in preference order.
#[derive(Debug)]
struct Partial {
    start: usize,
    branches: Vec<Branch>,
}

/// What the current expansion pass is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    /// The next input character.
    Consume(char),
    /// The end of a chunk; more input may follow.
    EndOfChunk,
    /// The end of all input.
    EndOfInput,
}

/// Feeds text through an automaton and resolves the best-ranked match.
///
/// Matches are ranked leftmost first, then longest, then by pattern
/// declaration order. Offsets count characters across all calls.
///
/// Once a match has been returned the matcher is resolved and ignores any
/// further input. [`Matcher::add_final`] consumes the matcher.
pub struct Matcher<'a, T: Tracer = NoopTracer> {
    automaton: &'a Automaton,
    pos: usize,
    partials: Vec<Partial>,
    best: Option<MatchRecord>,
    resolved: bool,
    tracer: T,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self::with_tracer(automaton, NoopTracer)
    }
}

impl<'a, T: Tracer> Matcher<'a, T> {
    /// Matcher reporting to `tracer`. Pass `&mut tracer` to keep ownership.
    pub fn with_tracer(automaton: &'a Automaton, tracer: T) -> Self {
        let mut matcher = Self {
            automaton,
            pos: 0,
            partials: Vec::new(),
            best: None,
            resolved: false,
            tracer,
        };
        matcher.start_partial(automaton.anchored_gate());
        matcher
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    /// Best match found so far, even if a longer or earlier one may follow.
    pub fn best(&self) -> Option<&MatchRecord> {
        self.best.as_ref()
    }

    /// Feeds `text`, which may be followed by more input.
    ///
    /// Returns a match once no further input could change it.
    pub fn add_chunk(&mut self, text: &str) -> Option<MatchRecord> {
        if self.resolved {
            return None;
        }
        if let Some(found) = self.feed(text) {
            return Some(found);
        }

        self.tracer.trace_finalize(self.pos, false);
        self.run_pass(Pass::EndOfChunk);
        if self.partials.is_empty() && self.best.is_some() {
            return self.resolve();
        }
        None
    }

    /// Feeds `text` as the end of input and returns the best match, if any.
    pub fn add_final(mut self, text: &str) -> Option<MatchRecord> {
        if self.resolved {
            return None;
        }
        if let Some(found) = self.feed(text) {
            return Some(found);
        }

        self.tracer.trace_finalize(self.pos, true);
        self.run_pass(Pass::EndOfInput);
        self.resolve()
    }

    /// Consumes `text` character by character.
    ///
    /// Stops early and resolves when every partial match is gone and a
    /// match is known.
    fn feed(&mut self, text: &str) -> Option<MatchRecord> {
        for ch in text.chars() {
            self.tracer.trace_char(self.pos, ch);
            self.run_pass(Pass::Consume(ch));
            self.pos += 1;

            if self.partials.is_empty() && self.best.is_some() {
                return self.resolve();
            }
            // a later start can never beat a known match
            if self.best.is_none() {
                self.start_partial(self.automaton.floating_gate());
            }
        }
        None
    }

    fn start_partial(&mut self, gate: NodeId) {
        self.tracer.trace_partial(self.pos);
        self.partials.push(Partial {
            start: self.pos,
            branches: vec![(gate, Namespace::new())],
        });
    }

    fn resolve(&mut self) -> Option<MatchRecord> {
        self.resolved = true;
        self.partials.clear();
        let result = self.best.take();
        self.tracer.trace_resolved(result.as_ref());
        result
    }

    /// Expands every partial match in start order.
    ///
    /// Partials starting after the current best match are dropped, since
    /// they cannot outrank it.
    fn run_pass(&mut self, pass: Pass) {
        let partials = std::mem::take(&mut self.partials);
        for partial in partials {
            if self.best.as_ref().is_some_and(|best| partial.start > best.start) {
                self.tracer.trace_pruned(partial.start);
                break;
            }
            let branches = self.expand(partial.start, partial.branches, pass);
            if branches.is_empty() {
                self.tracer.trace_exhausted(partial.start);
            } else {
                self.partials.push(Partial {
                    start: partial.start,
                    branches,
                });
            }
        }
    }

    /// Expands control nodes in place, depth first, and returns the branches
    /// left for the next pass.
    ///
    /// Match nodes are ranked as they come up. When consuming, character
    /// nodes are replaced by the nodes they lead to; otherwise they stay.
    /// At the end of a chunk a match found behind a pending transition stays
    /// as well, since the transition may still lead to a better one.
    fn expand(&mut self, start: usize, branches: Vec<Branch>, pass: Pass) -> Vec<Branch> {
        let automaton = self.automaton;
        let mut pending = branches;
        pending.reverse();
        let mut kept = Vec::new();
        let mut transition_seen = false;
        let mut targets = Vec::new();

        while let Some((id, mut ns)) = pending.pop() {
            let node = automaton.graph().node(id);
            self.tracer.trace_node(start, id, node);

            match node.kind() {
                NodeKind::Match => {
                    let &Node::Match(pattern) = node else {
                        continue;
                    };
                    if pass == Pass::EndOfChunk && transition_seen {
                        self.tracer.trace_deferred(start, pattern);
                        kept.push((id, ns));
                        continue;
                    }
                    self.record(MatchRecord {
                        start,
                        end: self.pos,
                        pattern,
                        tags: ns.into_tags(),
                    });
                }
                NodeKind::Character => match pass {
                    Pass::Consume(ch) => fork(consume(node, ch), ns, &mut kept),
                    Pass::EndOfChunk | Pass::EndOfInput => kept.push((id, ns)),
                },
                NodeKind::Transition => {
                    let next = match pass {
                        Pass::Consume(ch) => Some(ch),
                        Pass::EndOfInput => None,
                        Pass::EndOfChunk => {
                            transition_seen = true;
                            kept.push((id, ns));
                            continue;
                        }
                    };
                    let mark = pending.len();
                    fork(transition(node, next), ns, &mut pending);
                    pending[mark..].reverse();
                }
                NodeKind::Control => {
                    targets.clear();
                    control(node, &mut ns, self.pos, &mut targets);
                    let mark = pending.len();
                    fork(&targets, ns, &mut pending);
                    pending[mark..].reverse();
                }
            }
        }
        kept
    }

    fn record(&mut self, candidate: MatchRecord) {
        let accepted = candidate.beats(self.best.as_ref());
        self.tracer.trace_candidate(&candidate, accepted);
        if accepted {
            self.best = Some(candidate);
        }
    }
}

/// Pushes one branch per target in order. The last one takes `ns` itself.
fn fork(targets: &[NodeId], ns: Namespace, out: &mut Vec<Branch>) {
    let Some((&last, init)) = targets.split_last() else {
        return;
    };
    out.extend(init.iter().map(|&id| (id, ns.clone())));
    out.push((last, ns));
}

/// Successors of a zero-width control node at input position `pos`.
fn control(node: &Node, ns: &mut Namespace, pos: usize, out: &mut Vec<NodeId>) {
    match node {
        Node::Gate(links) => out.extend(links),
        Node::StartAnchor(links) => {
            if pos == 0 {
                out.extend(links);
            }
        }
        Node::Tag(links) => {
            ns.record_tag(pos);
            out.extend(links);
        }
        Node::Optional(optional) => out.extend(optional.successors()),
        Node::Loop(repeat) => {
            let step = ns.enter_loop(repeat, pos);
            repeat.successors(step, out);
        }
        Node::LoopExit { id, links } => {
            ns.exit_loop(*id);
            out.extend(links);
        }
        _ => {}
    }
}

/// Successors of a transition node before `next`, or at end of input.
fn transition(node: &Node, next: Option<char>) -> &[NodeId] {
    match node {
        Node::EndAnchor(links) if next.is_none() => links.as_slice(),
        _ => &[],
    }
}

/// Successors of a character node after consuming `ch`.
fn consume(node: &Node, ch: char) -> &[NodeId] {
    match node {
        Node::CharMap(map) => map.lookup(ch).as_slice(),
        Node::Class { class, links } if class.matches(ch) => links.as_slice(),
        Node::Complement(complement) if complement.accepts(ch) => complement.links.as_slice(),
        _ => &[],
    }
}
