use chrono::Local;
use std::collections::VecDeque;

pub mod commit;
pub mod debounce;

pub use commit::{CommitGate, commit_triggered};
pub use debounce::{Debouncer, Ticket};

pub const DEFAULT_CAPACITY: usize = 10;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One accepted reversal. Entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    pub reversed: String,
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(original: String, reversed: String, timestamp: String) -> Self {
        Self {
            original,
            reversed,
            timestamp,
        }
    }

    /// Row text as shown in the history list.
    pub fn display_line(&self) -> String {
        format!("{} → {}  {}", self.original, self.reversed, self.timestamp)
    }
}

/// Bounded list of reversals, newest first.
///
/// When an insertion would exceed the capacity the oldest entry is evicted.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a reversal stamped with the current local time.
    pub fn accept(&mut self, original: impl Into<String>, reversed: impl Into<String>) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.accept_at(original, reversed, timestamp);
    }

    pub fn accept_at(
        &mut self,
        original: impl Into<String>,
        reversed: impl Into<String>,
        timestamp: impl Into<String>,
    ) {
        let entry = HistoryEntry::new(original.into(), reversed.into(), timestamp.into());
        log::debug!("History: {}", entry.display_line());

        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Entries from newest to oldest.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
