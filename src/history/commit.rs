use super::{Debouncer, HistoryBuffer, Ticket};
use crate::reverse::{char_len, reverse};

pub const DEFAULT_MIN_COMMIT_LEN: usize = 3;

/// Whether the action button is shown and Enter is honoured for `raw` input.
pub fn trigger_available(raw: &str, min_len: usize) -> bool {
    char_len(raw) > min_len
}

/// Commit path of the basic page: reverse the trimmed input and record it.
///
/// Returns the reversed text, or `None` when the trimmed input is empty.
pub fn commit_triggered(raw: &str, history: &mut HistoryBuffer) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let reversed = reverse(trimmed);
    history.accept(trimmed, reversed.clone());
    Some(reversed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCommit {
    original: String,
    reversed: String,
}

/// Commit rules of the live page.
///
/// Typing schedules a commit that only lands after a quiet period; a manual
/// commit lands at once and cancels the scheduled one. Both paths refuse
/// short input and refuse to record the same string twice in a row.
#[derive(Debug, Clone)]
pub struct CommitGate {
    debouncer: Debouncer<PendingCommit>,
    last_committed: String,
    min_len: usize,
}

impl Default for CommitGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COMMIT_LEN)
    }
}

impl CommitGate {
    pub fn new(min_len: usize) -> Self {
        Self {
            debouncer: Debouncer::new(),
            last_committed: String::new(),
            min_len,
        }
    }

    /// Schedule a commit for the current input, replacing any pending one.
    ///
    /// Empty input cancels the pending commit and schedules nothing.
    pub fn on_input(&mut self, raw: &str) -> Option<Ticket> {
        if raw.is_empty() {
            self.debouncer.cancel();
            return None;
        }

        Some(self.debouncer.schedule(PendingCommit {
            original: raw.to_string(),
            reversed: reverse(raw),
        }))
    }

    /// Called when the quiet period for `ticket` has elapsed.
    pub fn on_quiet_period(&mut self, ticket: Ticket, history: &mut HistoryBuffer) -> bool {
        let Some(pending) = self.debouncer.fire(ticket) else {
            return false;
        };

        if char_len(pending.original.trim()) > self.min_len && pending.original != self.last_committed {
            history.accept(pending.original.clone(), pending.reversed);
            self.last_committed = pending.original;
            true
        } else {
            false
        }
    }

    /// Button or Enter on the live page.
    pub fn commit_now(&mut self, raw: &str, history: &mut HistoryBuffer) -> bool {
        let trimmed = raw.trim();
        if char_len(trimmed) <= self.min_len {
            return false;
        }

        self.debouncer.cancel();

        if trimmed == self.last_committed {
            return false;
        }

        history.accept(trimmed, reverse(trimmed));
        self.last_committed = trimmed.to_string();
        true
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.debouncer.pending_ticket()
    }

    #[cfg(test)]
    pub fn last_committed(&self) -> &str {
        &self.last_committed
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }
}
