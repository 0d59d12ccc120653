/// Identifies one scheduled commit. A newer schedule makes older tickets stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Holds at most one pending payload waiting for its quiet period to end.
///
/// The debouncer does not own a clock. Whoever calls `schedule` starts a timer
/// for the returned ticket and calls `fire` with that ticket once it elapses.
/// Only the most recent ticket yields its payload; stale or cancelled tickets
/// yield nothing.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    next_id: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is pending with `payload`.
    pub fn schedule(&mut self, payload: T) -> Ticket {
        let ticket = Ticket(self.next_id);
        self.next_id += 1;

        if let Some((superseded, _)) = self.pending.replace((ticket, payload)) {
            log::debug!("Debounce: {:?} superseded by {:?}", superseded, ticket);
        }

        ticket
    }

    /// Drop the pending payload. Calling it with nothing pending is a no-op.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match &self.pending {
            Some((live, _)) if *live == ticket => self.pending.take().map(|(_, payload)| payload),
            _ => {
                log::debug!("Debounce: ignoring stale {:?}", ticket);
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }
}
