use std::cmp::Ordering;
use std::ops::Range;

use crate::node::PatternId;

/// A complete match of one pattern, as ranked by the matcher.
///
/// Offsets count characters of the input, starting at 0 for the first
/// character ever fed to the matcher. `tags` holds the position of every `#`
/// passed on the way, in order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MatchRecord {
    pub start: usize,
    pub end: usize,
    pub pattern: PatternId,
    pub tags: Vec<usize>,
}

impl MatchRecord {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Leftmost wins, then longest, then the earliest declared pattern.
    pub fn rank(&self, other: &MatchRecord) -> Ordering {
        other
            .start
            .cmp(&self.start)
            .then(self.end.cmp(&other.end))
            .then(other.pattern.cmp(&self.pattern))
    }

    /// Whether `self` should replace `best` as the current answer.
    pub fn beats(&self, best: Option<&MatchRecord>) -> bool {
        best.is_none_or(|best| self.rank(best) == Ordering::Greater)
    }
}
