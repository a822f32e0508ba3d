//! Recursive-descent scanner for extended POSIX patterns.
//!
//! Beyond ERE syntax: `#` is a tag marker, and `?` after any quantifier makes
//! it reluctant (the pairing happens in the compiler).

use std::iter::Peekable;
use std::str::CharIndices;

use trellis_core::CharClass;

use super::ast::{Alternation, Bound, Bracket, BracketItem, Token, TokenKind};
use crate::error::{ParseError, Span};

/// Parses `source` into a parse tree.
///
/// Groups may nest at most `nesting_limit` levels deep.
pub fn scan(source: &str, nesting_limit: u32) -> Result<Alternation, ParseError> {
    let mut scanner = Scanner {
        source,
        chars: source.char_indices().peekable(),
        nesting_limit,
    };
    let root = scanner.alternation(0)?;
    if let Some(at) = scanner.peek_offset(')') {
        return Err(ParseError::ExtraCloseParenthesis {
            span: Span::new(at, at + 1),
        });
    }
    Ok(root)
}

struct Scanner<'s> {
    source: &'s str,
    chars: Peekable<CharIndices<'s>>,
    nesting_limit: u32,
}

/// Bracket member before ranges are resolved.
#[derive(Clone, Copy)]
enum Raw {
    Char(char),
    Dash,
    Class(CharClass),
}

impl<'s> Scanner<'s> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn peek_offset(&mut self, expected: char) -> Option<usize> {
        match self.chars.peek() {
            Some(&(at, ch)) if ch == expected => Some(at),
            _ => None,
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    /// Byte offset of the next unread character.
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |&(at, _)| at)
    }

    /// Stops before an unmatched `)` or at end of input.
    fn alternation(&mut self, depth: u32) -> Result<Alternation, ParseError> {
        let mut branches = vec![Vec::new()];
        while let Some(ch) = self.peek() {
            match ch {
                ')' => break,
                '|' => {
                    self.bump();
                    branches.push(Vec::new());
                }
                _ => {
                    let token = self.token(depth)?;
                    if let Some(branch) = branches.last_mut() {
                        branch.push(token);
                    }
                }
            }
        }
        Ok(Alternation { branches })
    }

    fn token(&mut self, depth: u32) -> Result<Token, ParseError> {
        let Some((at, ch)) = self.bump() else {
            return Err(ParseError::UnterminatedGroup {
                span: Span::empty(self.source.len()),
            });
        };
        let kind = match ch {
            '\\' => TokenKind::Char(self.escape(at)?),
            '[' => TokenKind::Bracket(self.bracket(at)?),
            '{' => TokenKind::Repeat(self.bound(at)?),
            '(' => TokenKind::Group(self.group(at, depth)?),
            '*' => TokenKind::Star,
            '+' => TokenKind::Plus,
            '?' => TokenKind::Question,
            '.' => TokenKind::Any,
            '^' => TokenKind::StartAnchor,
            '$' => TokenKind::EndAnchor,
            '#' => TokenKind::Tag,
            other => TokenKind::Char(other),
        };
        let span = Span::new(at, self.offset());
        Ok(Token { kind, span })
    }

    fn group(&mut self, at: usize, depth: u32) -> Result<Alternation, ParseError> {
        let open = Span::new(at, at + 1);
        if depth >= self.nesting_limit {
            return Err(ParseError::NestingTooDeep {
                span: open,
                limit: self.nesting_limit,
            });
        }
        let inner = self.alternation(depth + 1)?;
        match self.bump() {
            Some((_, ')')) => Ok(inner),
            _ => Err(ParseError::UnterminatedGroup { span: open }),
        }
    }

    /// Called after the backslash at `at` was consumed.
    fn escape(&mut self, at: usize) -> Result<char, ParseError> {
        let Some((_, ch)) = self.bump() else {
            return Err(ParseError::InvalidEscape {
                span: Span::new(at, self.source.len()),
                reason: "pattern ends with a backslash",
            });
        };
        let escaped = match ch {
            'a' => '\x07',
            'b' => '\x08',
            'e' => '\x1b',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            '0'..='7' => {
                let mut value = ch as u32 - '0' as u32;
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            self.bump();
                        }
                        None => break,
                    }
                }
                if value > 0o377 {
                    return Err(ParseError::InvalidEscape {
                        span: Span::new(at, self.offset()),
                        reason: "octal value greater than \\377",
                    });
                }
                char::from(value as u8)
            }
            'x' => {
                let mut value = 0;
                for _ in 0..2 {
                    match self.bump().and_then(|(_, d)| d.to_digit(16)) {
                        Some(digit) => value = value * 16 + digit,
                        None => {
                            return Err(ParseError::InvalidEscape {
                                span: Span::new(at, self.offset()),
                                reason: "expected two hexadecimal digits after `\\x`",
                            });
                        }
                    }
                }
                char::from(value as u8)
            }
            other => other,
        };
        Ok(escaped)
    }

    /// Called after the `{` at `at` was consumed.
    fn bound(&mut self, at: usize) -> Result<Bound, ParseError> {
        let lower = self.digits();
        let (lower, upper) = match self.bump() {
            Some((_, '}')) => {
                let lower = self.number(at, &lower, "expected a number after `{`")?;
                (lower, Some(lower))
            }
            Some((_, ',')) => {
                let lower = self.number(at, &lower, "expected a number between `{` and `,`")?;
                let upper = self.digits();
                match self.bump() {
                    Some((_, '}')) if upper.is_empty() => (lower, None),
                    Some((_, '}')) => {
                        let upper = self.number(at, &upper, "expected a number")?;
                        (lower, Some(upper))
                    }
                    Some(_) => {
                        return Err(self.bound_error(at, "expected a number or `}` after `,`"));
                    }
                    None => return Err(self.bound_error(at, "missing close brace `}`")),
                }
            }
            Some(_) => return Err(self.bound_error(at, "expected a number after `{`")),
            None => return Err(self.bound_error(at, "missing close brace `}`")),
        };
        if upper.is_some_and(|upper| upper < lower) {
            return Err(self.bound_error(at, "upper bound is less than lower bound"));
        }
        Ok(Bound { lower, upper })
    }

    fn digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.peek().filter(char::is_ascii_digit) {
            digits.push(ch);
            self.bump();
        }
        digits
    }

    fn number(&mut self, at: usize, digits: &str, missing: &'static str) -> Result<u32, ParseError> {
        if digits.is_empty() {
            return Err(self.bound_error(at, missing));
        }
        digits
            .parse()
            .map_err(|_| self.bound_error(at, "repetition count is too large"))
    }

    fn bound_error(&mut self, at: usize, reason: &'static str) -> ParseError {
        ParseError::InvalidRepetitionBound {
            span: Span::new(at, self.offset()),
            reason,
        }
    }

    /// Called after the `[` at `at` was consumed.
    fn bracket(&mut self, at: usize) -> Result<Bracket, ParseError> {
        let negated = self.peek() == Some('^');
        if negated {
            self.bump();
        }

        let leading_close = self.peek() == Some(']');
        let mut raw: Vec<(Raw, Span)> = Vec::new();
        loop {
            let Some((pos, ch)) = self.bump() else {
                // `[]` or `[^]` with no later `]` to close it
                if leading_close && raw.len() == 1 {
                    return Err(ParseError::EmptyBracketExpression {
                        span: Span::new(at, self.source.len()),
                    });
                }
                return Err(ParseError::UnterminatedBracket {
                    span: Span::new(at, at + 1),
                });
            };
            let item = match ch {
                // a `]` right after `[` or `[^` is literal
                ']' if !raw.is_empty() => break,
                '\\' => Raw::Char(self.escape(pos)?),
                '[' if self.peek() == Some(':') => match self.class_name() {
                    Some(name) => {
                        let span = Span::new(pos, self.offset());
                        match CharClass::from_name(&name) {
                            Some(class) => Raw::Class(class),
                            None => return Err(ParseError::UnknownCharacterClass { span, name }),
                        }
                    }
                    None => Raw::Char('['),
                },
                '-' if matches!(raw.last(), Some((Raw::Char(_), _))) => Raw::Dash,
                other => Raw::Char(other),
            };
            raw.push((item, Span::new(pos, self.offset())));
        }

        Ok(Bracket {
            negated,
            items: resolve_ranges(&raw)?,
        })
    }

    /// Consumes `:name:]` if it follows, returning the name.
    fn class_name(&mut self) -> Option<String> {
        let mut ahead = self.chars.clone();
        ahead.next();
        let mut name = String::new();
        while let Some(&(_, ch)) = ahead.peek() {
            if !ch.is_ascii_alphabetic() {
                break;
            }
            name.push(ch);
            ahead.next();
        }
        if name.is_empty() {
            return None;
        }
        match (ahead.next(), ahead.next()) {
            (Some((_, ':')), Some((_, ']'))) => {
                self.chars = ahead;
                Some(name)
            }
            _ => None,
        }
    }
}

/// Pairs `x-y` from the right, so in `a-c-e` the range is `c-e` and the
/// first dash is literal. A dash that ends up unpaired is literal too.
fn resolve_ranges(raw: &[(Raw, Span)]) -> Result<Vec<BracketItem>, ParseError> {
    let mut items = Vec::with_capacity(raw.len());
    let mut i = raw.len();
    while i > 0 {
        i -= 1;
        if i >= 2
            && let (Raw::Char(lo), Raw::Dash, Raw::Char(hi)) = (raw[i - 2].0, raw[i - 1].0, raw[i].0)
        {
            if lo > hi {
                return Err(ParseError::InvalidRange {
                    span: raw[i - 2].1.cover(raw[i].1),
                    lo,
                    hi,
                });
            }
            items.push(BracketItem::Range(lo, hi));
            i -= 2;
            continue;
        }
        items.push(match raw[i].0 {
            Raw::Char(ch) => BracketItem::Char(ch),
            Raw::Dash => BracketItem::Char('-'),
            Raw::Class(class) => BracketItem::Class(class),
        });
    }
    items.reverse();
    Ok(items)
}
