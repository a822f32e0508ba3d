//! Parse tree types.
//!
//! Quantifiers stay separate tokens following their operand; the compiler
//! pairs them up while walking a branch back to front.

use trellis_core::CharClass;

use crate::error::Span;

/// `a|b|c`. A pattern without `|` is a single branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alternation {
    pub branches: Vec<Vec<Token>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Char(char),
    /// `.`
    Any,
    Bracket(Bracket),
    Group(Alternation),
    StartAnchor,
    EndAnchor,
    /// `#`
    Tag,
    Star,
    Plus,
    Question,
    /// `{m}`, `{m,}`, `{m,n}`
    Repeat(Bound),
}

impl TokenKind {
    /// Whether a quantifier may apply to this token.
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::Char(_)
                | TokenKind::Any
                | TokenKind::Bracket(_)
                | TokenKind::Group(_)
                | TokenKind::StartAnchor
                | TokenKind::EndAnchor
        )
    }

    /// Bounds of a quantifier token, before any reluctant `?` is applied.
    pub fn bound(&self) -> Option<Bound> {
        match self {
            TokenKind::Star => Some(Bound::STAR),
            TokenKind::Plus => Some(Bound::PLUS),
            TokenKind::Question => Some(Bound::OPTIONAL),
            TokenKind::Repeat(bound) => Some(*bound),
            _ => None,
        }
    }
}

/// Repetition bounds; `upper` is `None` when unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bound {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl Bound {
    pub const STAR: Bound = Bound {
        lower: 0,
        upper: None,
    };
    pub const PLUS: Bound = Bound {
        lower: 1,
        upper: None,
    };
    pub const OPTIONAL: Bound = Bound {
        lower: 0,
        upper: Some(1),
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bracket {
    pub negated: bool,
    pub items: Vec<BracketItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BracketItem {
    Char(char),
    /// Inclusive.
    Range(char, char),
    Class(CharClass),
}
