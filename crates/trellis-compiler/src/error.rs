//! Pattern syntax errors and their rendering.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// Byte range into the pattern source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Smallest span covering both.
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Category of a [`ParseError`], without location or detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnterminatedBracket,
    UnterminatedGroup,
    ExtraCloseParenthesis,
    EmptyBracketExpression,
    InvalidRepetitionBound,
    LeadingQuantifier,
    MisplacedToken,
    InvalidEscape,
    InvalidRange,
    UnknownCharacterClass,
    NestingTooDeep,
}

/// Why a pattern was rejected. The pattern set it was added to is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing close bracket `]`")]
    UnterminatedBracket { span: Span },

    #[error("missing close parenthesis `)`")]
    UnterminatedGroup { span: Span },

    #[error("unmatched close parenthesis `)`")]
    ExtraCloseParenthesis { span: Span },

    /// `[]` or `[^]` left without a closing bracket. A `]` right after the
    /// opening `[` or `[^` is a member, so a closed bracket is never empty.
    #[error("bracket expression matches nothing")]
    EmptyBracketExpression { span: Span },

    #[error("invalid repetition bound: {reason}")]
    InvalidRepetitionBound { span: Span, reason: &'static str },

    #[error("`{token}` has nothing to repeat")]
    LeadingQuantifier { span: Span, token: String },

    #[error("`{token}` cannot be repeated")]
    MisplacedToken { span: Span, token: String },

    #[error("invalid escape: {reason}")]
    InvalidEscape { span: Span, reason: &'static str },

    #[error("invalid range `{lo}-{hi}`: start is greater than end")]
    InvalidRange { span: Span, lo: char, hi: char },

    #[error("unknown character class `[:{name}:]`")]
    UnknownCharacterClass { span: Span, name: String },

    #[error("groups nested deeper than {limit} levels")]
    NestingTooDeep { span: Span, limit: u32 },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnterminatedBracket { .. } => ParseErrorKind::UnterminatedBracket,
            ParseError::UnterminatedGroup { .. } => ParseErrorKind::UnterminatedGroup,
            ParseError::ExtraCloseParenthesis { .. } => ParseErrorKind::ExtraCloseParenthesis,
            ParseError::EmptyBracketExpression { .. } => ParseErrorKind::EmptyBracketExpression,
            ParseError::InvalidRepetitionBound { .. } => ParseErrorKind::InvalidRepetitionBound,
            ParseError::LeadingQuantifier { .. } => ParseErrorKind::LeadingQuantifier,
            ParseError::MisplacedToken { .. } => ParseErrorKind::MisplacedToken,
            ParseError::InvalidEscape { .. } => ParseErrorKind::InvalidEscape,
            ParseError::InvalidRange { .. } => ParseErrorKind::InvalidRange,
            ParseError::UnknownCharacterClass { .. } => ParseErrorKind::UnknownCharacterClass,
            ParseError::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnterminatedBracket { span }
            | ParseError::UnterminatedGroup { span }
            | ParseError::ExtraCloseParenthesis { span }
            | ParseError::EmptyBracketExpression { span }
            | ParseError::InvalidRepetitionBound { span, .. }
            | ParseError::LeadingQuantifier { span, .. }
            | ParseError::MisplacedToken { span, .. }
            | ParseError::InvalidEscape { span, .. }
            | ParseError::InvalidRange { span, .. }
            | ParseError::UnknownCharacterClass { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }

    /// Caret diagnostic pointing into `source`, without colors.
    pub fn render(&self, source: &str) -> String {
        self.render_with(source, false)
    }

    pub fn render_with(&self, source: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.to_string();
        let span = self.span();
        let end = if span.start == span.end {
            (span.start + 1).min(source.len())
        } else {
            span.end
        };

        let snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(span.start..end).label(&message));
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        renderer.render(&report).to_string()
    }
}
