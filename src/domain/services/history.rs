#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::collections::VecDeque;

use crate::domain::models::HistoryEntry;

const CAPACITY: usize = 10;

/// Insertion-ordered store of past completed analyses, most recent first.
/// Once full, every push evicts the oldest entry.
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> History {
        return History::new(CAPACITY);
    }
}

impl History {
    pub fn new(capacity: usize) -> History {
        return History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        };
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn list(&self) -> Vec<HistoryEntry> {
        return self.entries.iter().cloned().collect::<Vec<HistoryEntry>>();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
