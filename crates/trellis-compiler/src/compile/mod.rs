//! Parse tree to node graph, by continuation passing.
//!
//! Each construct is compiled against the links of whatever follows it and
//! returns the links that enter it, so a branch is emitted right to left.
//!
//! - `compiler`: entry point, alternations and sequences
//! - `quantifier`: pairing quantifiers with operands and desugaring them
//! - `atoms`: characters, brackets, anchors, groups

mod atoms;
mod compiler;
mod quantifier;


pub use compiler::{Compiler, compile};
