//! Bounded, insertion-ordered history of generation results.
//!
//! [`HistoryCache`] keeps at most [`HISTORY_CAPACITY`] entries, most recent
//! first. Adding to a full cache evicts the oldest entry (FIFO with a cap;
//! reads never reorder entries).

use crate::generation::GenerationResult;
use std::collections::VecDeque;

/// Maximum number of results kept per session.
pub const HISTORY_CAPACITY: usize = 10;

/// A stored generation result.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    sequence: u64,
    result: GenerationResult,
}

impl HistoryEntry {
    /// Insertion sequence number, increasing with every add in this cache
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }
}

/// Most-recent-first history with a fixed capacity.
#[derive(Debug, Clone, Default)]
pub struct HistoryCache {
    entries: VecDeque<HistoryEntry>,
    next_sequence: u64,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
            next_sequence: 0,
        }
    }

    /// Insert a result at the most-recent position, evicting the oldest
    /// entry if the cache would exceed its capacity.
    ///
    /// Returns the evicted entry, if any.
    pub fn add(&mut self, result: GenerationResult) -> Option<HistoryEntry> {
        let entry = HistoryEntry {
            sequence: self.next_sequence,
            result,
        };
        self.next_sequence += 1;
        self.entries.push_front(entry);

        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Snapshot of all entries, most recent first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Entry at `index` in most-recent-first order.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
