//! POSIX character classes.

use std::fmt;

/// A named character class, as written inside `[: :]`, plus the `.` wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Any character (`.`).
    Any,
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    XDigit,
}

impl CharClass {
    /// Every class accepted inside `[: :]`.
    pub const NAMED: [CharClass; 12] = [
        CharClass::Alnum,
        CharClass::Alpha,
        CharClass::Blank,
        CharClass::Cntrl,
        CharClass::Digit,
        CharClass::Graph,
        CharClass::Lower,
        CharClass::Print,
        CharClass::Punct,
        CharClass::Space,
        CharClass::Upper,
        CharClass::XDigit,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED.into_iter().find(|class| class.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Any => "any",
            CharClass::Alnum => "alnum",
            CharClass::Alpha => "alpha",
            CharClass::Blank => "blank",
            CharClass::Cntrl => "cntrl",
            CharClass::Digit => "digit",
            CharClass::Graph => "graph",
            CharClass::Lower => "lower",
            CharClass::Print => "print",
            CharClass::Punct => "punct",
            CharClass::Space => "space",
            CharClass::Upper => "upper",
            CharClass::XDigit => "xdigit",
        }
    }

    /// Small classes the compiler lowers to literal characters instead of a
    /// predicate node, so they can take part in character-map merging.
    pub fn expansion(self) -> Option<&'static str> {
        match self {
            CharClass::Blank => Some(" \t"),
            CharClass::Digit => Some("0123456789"),
            CharClass::XDigit => Some("0123456789abcdefABCDEF"),
            _ => None,
        }
    }

    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::Alnum => ch.is_alphanumeric(),
            CharClass::Alpha => ch.is_alphabetic(),
            CharClass::Blank => ch == ' ' || ch == '\t',
            CharClass::Cntrl => is_cntrl(ch),
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Graph => !is_cntrl(ch) && !ch.is_whitespace(),
            CharClass::Lower => ch.is_lowercase(),
            CharClass::Print => !is_cntrl(ch),
            CharClass::Punct => !is_cntrl(ch) && !ch.is_alphanumeric() && ch != ' ',
            CharClass::Space => ch.is_whitespace(),
            CharClass::Upper => ch.is_uppercase(),
            CharClass::XDigit => ch.is_ascii_hexdigit(),
        }
    }
}

fn is_cntrl(ch: char) -> bool {
    (ch as u32) < 32 || ch as u32 == 127
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Any => f.write_str("."),
            class => write!(f, "[:{}:]", class.name()),
        }
    }
}
