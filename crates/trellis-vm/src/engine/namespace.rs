//! Per-branch state carried alongside a node.

use trellis_core::{Loop, LoopId, LoopStep};

/// Tag positions and loop counters of one branch.
///
/// Every fork clones the namespace, so sibling branches never see each
/// other's tags or counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespace {
    tags: Vec<usize>,
    counters: Vec<Counter>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Counter {
    id: LoopId,
    /// Iterations completed.
    count: u32,
    /// Input position at the last entry.
    last: usize,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[usize] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<usize> {
        self.tags
    }

    pub fn record_tag(&mut self, pos: usize) {
        self.tags.push(pos);
    }

    /// Enters `repeat` at input position `pos` and decides where to go next.
    ///
    /// The first entry starts the counter at zero. Every later entry counts
    /// one finished iteration and checks whether it consumed any input.
    /// The count saturates; past every bound its exact value is irrelevant.
    pub fn enter_loop(&mut self, repeat: &Loop, pos: usize) -> LoopStep {
        match self.counters.iter_mut().find(|c| c.id == repeat.id) {
            Some(counter) => {
                counter.count = counter.count.saturating_add(1);
                let stalled = counter.last == pos;
                counter.last = pos;
                repeat.step(counter.count, stalled)
            }
            None => {
                self.counters.push(Counter {
                    id: repeat.id,
                    count: 0,
                    last: pos,
                });
                repeat.step(0, false)
            }
        }
    }

    /// Forgets the counter of loop `id`, so a later entry starts afresh.
    pub fn exit_loop(&mut self, id: LoopId) {
        self.counters.retain(|c| c.id != id);
    }

    /// Iterations completed in loop `id`, if the branch is inside it.
    pub fn iterations(&self, id: LoopId) -> Option<u32> {
        self.counters.iter().find(|c| c.id == id).map(|c| c.count)
    }

    #[cfg(test)]
    pub(super) fn set_iterations(&mut self, id: LoopId, count: u32) {
        if let Some(counter) = self.counters.iter_mut().find(|c| c.id == id) {
            counter.count = count;
        }
    }
}
