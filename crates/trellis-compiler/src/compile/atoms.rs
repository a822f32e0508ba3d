//! Single-position constructs.

use indexmap::IndexSet;
use trellis_core::{CharClass, CharMap, Complement, Links, Node};

use super::compiler::Compiler;
use crate::error::ParseError;
use crate::parser::{Bracket, BracketItem, Token, TokenKind};

impl Compiler<'_> {
    pub(super) fn compile_atom(&mut self, token: &Token, next: &Links) -> Result<Links, ParseError> {
        let node = match &token.kind {
            TokenKind::Char(ch) => Node::CharMap(CharMap::matching([*ch], next)),
            TokenKind::Any => Node::Class {
                class: CharClass::Any,
                links: self.merged(next),
            },
            TokenKind::StartAnchor => Node::StartAnchor(self.merged(next)),
            TokenKind::EndAnchor => Node::EndAnchor(self.merged(next)),
            TokenKind::Group(alternation) => return self.compile_alternation(alternation, next),
            TokenKind::Bracket(bracket) => return Ok(self.compile_bracket(bracket, next)),
            _ => {
                return Err(ParseError::MisplacedToken {
                    span: token.span,
                    token: self.slice(token.span),
                });
            }
        };
        Ok(Links::raw([self.add_node(node)]))
    }

    /// Literal members share one character map; each remaining class gets a
    /// node of its own. `blank`, `digit` and `xdigit` count as literals.
    fn compile_bracket(&mut self, bracket: &Bracket, next: &Links) -> Links {
        let mut chars = IndexSet::new();
        let mut classes = Vec::new();
        for item in &bracket.items {
            match *item {
                BracketItem::Char(ch) => {
                    chars.insert(ch);
                }
                BracketItem::Range(lo, hi) => chars.extend(lo..=hi),
                BracketItem::Class(class) => match class.expansion() {
                    Some(expanded) => chars.extend(expanded.chars()),
                    None if !classes.contains(&class) => classes.push(class),
                    None => {}
                },
            }
        }

        if bracket.negated {
            let node = if classes.is_empty() {
                Node::CharMap(CharMap::excluding(chars, next))
            } else {
                Node::Complement(Complement {
                    chars,
                    classes,
                    links: self.merged(next),
                })
            };
            return Links::raw([self.add_node(node)]);
        }

        let mut entries = Vec::with_capacity(classes.len() + 1);
        if !chars.is_empty() {
            entries.push(self.add_node(Node::CharMap(CharMap::matching(chars, next))));
        }
        for class in classes {
            let links = self.merged(next);
            entries.push(self.add_node(Node::Class { class, links }));
        }
        Links::raw(entries)
    }
}
