//! Helpers shared by the compiler tests.

use trellis_core::{Automaton, NoopTracer};

use crate::{CompileOptions, ParseError, compile};

/// Graph dump of `patterns` compiled in order into one automaton.
pub fn dump(patterns: &[&str]) -> String {
    dump_with(patterns, CompileOptions::default())
}

pub fn dump_with(patterns: &[&str], options: CompileOptions) -> String {
    let mut automaton = Automaton::new(options.get_merge_character_maps());
    for pattern in patterns {
        if let Err(err) = compile(&mut automaton, pattern, &options, &mut NoopTracer) {
            panic!("{pattern:?} should compile:\n{}", err.render(pattern));
        }
    }
    automaton.dump()
}

/// The error `pattern` is rejected with.
pub fn error(pattern: &str) -> ParseError {
    let mut automaton = Automaton::default();
    match compile(&mut automaton, pattern, &CompileOptions::default(), &mut NoopTracer) {
        Ok(_) => panic!("{pattern:?} should not compile"),
        Err(err) => err,
    }
}
