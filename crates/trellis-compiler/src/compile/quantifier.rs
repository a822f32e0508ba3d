//! Quantifier pairing and desugaring.
//!
//! `*`, `+` and `?` are `{0,}`, `{1,}` and `{0,1}`. A `?` directly after any
//! quantifier makes that quantifier reluctant instead. Greediness only
//! decides link order: the preferred alternative is listed first.

use trellis_core::{Links, Loop, Node, Optional};

use super::compiler::Compiler;
use crate::error::ParseError;
use crate::parser::{Bound, Token, TokenKind};

/// A quantifier resolved against its operand.
pub(super) struct Quantified<'t> {
    pub operand: &'t Token,
    pub bound: Bound,
    pub greedy: bool,
    /// Tokens before the operand.
    pub rest: &'t [Token],
}

impl<'t> Quantified<'t> {
    /// `quantifier` is the last token of a branch and `before` everything
    /// preceding it.
    pub fn split(
        compiler: &Compiler<'_>,
        quantifier: &'t Token,
        bound: Bound,
        before: &'t [Token],
    ) -> Result<Self, ParseError> {
        let mut span = quantifier.span;
        let (bound, greedy, before) = match before.split_last() {
            Some((prev, earlier)) if quantifier.kind == TokenKind::Question => {
                match prev.kind.bound() {
                    Some(prev_bound) => {
                        span = prev.span.cover(span);
                        (prev_bound, false, earlier)
                    }
                    None => (bound, true, before),
                }
            }
            _ => (bound, true, before),
        };

        let Some((operand, rest)) = before.split_last() else {
            return Err(ParseError::LeadingQuantifier {
                span,
                token: compiler.slice(span),
            });
        };
        if !operand.kind.is_atom() {
            return Err(ParseError::MisplacedToken {
                span: operand.span,
                token: compiler.slice(operand.span),
            });
        }

        Ok(Self {
            operand,
            bound,
            greedy,
            rest,
        })
    }
}

impl Compiler<'_> {
    pub(super) fn compile_quantified(
        &mut self,
        quantified: &Quantified<'_>,
        next: &Links,
    ) -> Result<Links, ParseError> {
        let Bound { lower, upper } = quantified.bound;
        let greedy = quantified.greedy;
        match upper {
            Some(0) => Ok(next.clone()),
            Some(1) if lower == 0 => {
                let skip = self.merged(next);
                let body = self.compile_atom(quantified.operand, next)?;
                let take = self.merged(&body);
                let optional = Node::Optional(Optional { greedy, take, skip });
                Ok(Links::raw([self.add_node(optional)]))
            }
            Some(1) => self.compile_atom(quantified.operand, next),
            _ => {
                let id = self.automaton.next_loop();
                let links = self.merged(next);
                let exit = self.add_node(Node::LoopExit { id, links });
                let repeat = self.add_node(Node::Loop(Loop {
                    id,
                    lower,
                    upper,
                    greedy,
                    body: Links::new(),
                    exit,
                }));
                let body = self.compile_atom(quantified.operand, &Links::raw([repeat]))?;
                self.automaton
                    .graph_mut()
                    .link_from(repeat, body.as_slice());
                Ok(Links::raw([repeat]))
            }
        }
    }
}
