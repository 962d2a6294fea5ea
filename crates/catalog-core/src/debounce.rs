use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces rapid-fire search input and guards against out-of-order
/// responses. Each keystroke issues a ticket; `settle` waits out the debounce
/// window and reports whether the ticket is still the newest one, and
/// `try_apply` accepts a finished response only if nothing newer was issued.
/// Last request wins, explicitly.
pub struct SearchDebouncer {
    interval: Duration,
    latest_issued: AtomicU64,
    latest_applied: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
}

impl SearchDebouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            latest_issued: AtomicU64::new(0),
            latest_applied: AtomicU64::new(0),
        }
    }

    pub fn issue(&self) -> SearchTicket {
        let id = self.latest_issued.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket { id }
    }

    /// Wait out the debounce window. Returns false when a newer ticket was
    /// issued in the meantime, in which case the caller should not fetch.
    pub async fn settle(&self, ticket: &SearchTicket) -> bool {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
        self.is_current(ticket)
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.id == self.latest_issued.load(Ordering::SeqCst)
    }

    /// Accept a completed response. Returns false for a stale ticket, i.e.
    /// one older than a response already applied or no longer the newest
    /// request; the caller must discard its result.
    pub fn try_apply(&self, ticket: &SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.latest_applied.fetch_max(ticket.id, Ordering::SeqCst) < ticket.id
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stale_response_is_dropped() {
        let debouncer = SearchDebouncer::new(Duration::ZERO);
        let slow = debouncer.issue();
        let fast = debouncer.issue();

        // The newer request resolves first
        assert!(debouncer.try_apply(&fast));
        // The earlier one arrives late and must not overwrite it
        assert!(!debouncer.try_apply(&slow));
    }

    #[tokio::test]
    async fn superseded_ticket_never_settles() {
        let debouncer = SearchDebouncer::new(Duration::from_millis(20));
        let first = debouncer.issue();
        let settle_first = debouncer.settle(&first);
        let second = debouncer.issue();

        assert!(!settle_first.await);
        assert!(debouncer.settle(&second).await);
        assert!(debouncer.try_apply(&second));
    }

    #[tokio::test]
    async fn same_ticket_applies_once() {
        let debouncer = SearchDebouncer::new(Duration::ZERO);
        let ticket = debouncer.issue();
        assert!(debouncer.try_apply(&ticket));
        assert!(!debouncer.try_apply(&ticket));
    }
}
