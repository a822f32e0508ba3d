//! Pattern text to parse tree.

mod ast;
mod scanner;


pub use ast::{Alternation, Bound, Bracket, BracketItem, Token, TokenKind};
pub use scanner::scan;
