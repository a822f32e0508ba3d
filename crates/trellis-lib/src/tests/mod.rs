
use crate::{Match, Pattern};

/// A pattern set built from `(source, value)` pairs.
pub fn set<T>(patterns: impl IntoIterator<Item = (&'static str, T)>) -> Pattern<T> {
    let mut pattern = Pattern::new();
    for (source, value) in patterns {
        if let Err(err) = pattern.add_pattern(source, value) {
            panic!("{source:?} should compile:\n{}", err.render(source));
        }
    }
    pattern
}

/// `(start, end, value)` of a match.
pub fn hit<T: Copy>(found: Option<Match<'_, T>>) -> Option<(usize, usize, T)> {
    found.map(|m| (m.start(), m.end(), *m.value()))
}
