//! Compiler state and entry point.

use trellis_core::{Automaton, Links, Node, NodeId, PatternId, Tracer};

use super::quantifier::Quantified;
use crate::error::{ParseError, Span};
use crate::options::CompileOptions;
use crate::parser::{Alternation, Token, TokenKind, scan};

/// Compiles `source` as the next pattern of `automaton`.
///
/// On error the automaton is left exactly as it was.
pub fn compile<T: Tracer>(
    automaton: &mut Automaton,
    source: &str,
    options: &CompileOptions,
    tracer: &mut T,
) -> Result<PatternId, ParseError> {
    let root = scan(source, options.get_nesting_limit())?;

    let checkpoint = automaton.checkpoint();
    let pattern = automaton.next_pattern();
    let mut compiler = Compiler::new(automaton, source);
    let entries = match compiler.compile_pattern(&root, pattern) {
        Ok(entries) => entries,
        Err(err) => {
            automaton.rollback(checkpoint);
            return Err(err);
        }
    };

    automaton.splice(entries.as_slice());
    tracer.trace_compiled(pattern, source, automaton);
    Ok(pattern)
}

/// Emits nodes for one pattern into a shared automaton.
pub struct Compiler<'a> {
    pub(super) automaton: &'a mut Automaton,
    pub(super) source: &'a str,
}

impl<'a> Compiler<'a> {
    pub fn new(automaton: &'a mut Automaton, source: &'a str) -> Self {
        Self { automaton, source }
    }

    /// Compiles `root` ending in a match of `pattern` and returns its entries.
    pub fn compile_pattern(
        &mut self,
        root: &Alternation,
        pattern: PatternId,
    ) -> Result<Links, ParseError> {
        let accept = self.add_node(Node::Match(pattern));
        self.compile_alternation(root, &Links::raw([accept]))
    }

    pub(super) fn add_node(&mut self, node: Node) -> NodeId {
        self.automaton.graph_mut().add_node(node)
    }

    /// `ids` added one by one, merging character maps.
    pub(super) fn merged(&mut self, ids: &Links) -> Links {
        let mut links = Links::new();
        self.automaton.graph_mut().add_links(&mut links, ids.as_slice());
        links
    }

    /// Pattern text under `span`, for error messages.
    pub(super) fn slice(&self, span: Span) -> String {
        self.source
            .get(span.range())
            .unwrap_or_default()
            .to_string()
    }

    /// Every branch continues with the same `next`; entries are concatenated.
    pub(super) fn compile_alternation(
        &mut self,
        alternation: &Alternation,
        next: &Links,
    ) -> Result<Links, ParseError> {
        let mut entries = Links::new();
        for branch in &alternation.branches {
            entries.append(&self.compile_sequence(branch, next)?);
        }
        Ok(entries)
    }

    fn compile_sequence(&mut self, tokens: &[Token], next: &Links) -> Result<Links, ParseError> {
        let mut links = next.clone();
        let mut rest = tokens;
        while let Some((last, init)) = rest.split_last() {
            if let Some(bound) = last.kind.bound() {
                let quantified = Quantified::split(self, last, bound, init)?;
                rest = quantified.rest;
                links = self.compile_quantified(&quantified, &links)?;
                continue;
            }
            rest = init;
            links = match &last.kind {
                TokenKind::Tag => {
                    let tag = Node::Tag(self.merged(&links));
                    Links::raw([self.add_node(tag)])
                }
                _ => self.compile_atom(last, &links)?,
            };
        }
        Ok(links)
    }
}
