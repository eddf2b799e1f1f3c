use std::collections::VecDeque;

use super::action::Direction;

/// Pending direction requests, consumed one per tick.
///
/// A request equal to the last queued entry is dropped, so holding a key
/// down does not flood the queue while distinct presses are all kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request unless it repeats the last one. Returns whether it was queued.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.pending.back() == Some(&direction) {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn last(&self) -> Option<Direction> {
        self.pending.back().copied()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
