//! "Last request wins" gate for listing fetches.
//!
//! # Responsibility
//! - Hand out monotonically increasing tickets, one per issued request.
//! - Tell whether a response still belongs to the newest request.
//!
//! # Invariants
//! - Only the most recently issued ticket is current.
//! - Response arrival order never changes which ticket is current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token attached to one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Shared sequence counter; safe to consult from any thread.
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: AtomicU64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier one.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is still the newest issued ticket.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGate;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn newer_ticket_supersedes_older() {
        let gate = RequestGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn tickets_are_unique_across_threads() {
        let gate = Arc::new(RequestGate::new());
        let handles = (0..4)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || (0..50).map(|_| gate.issue()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();

        let mut all = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 200);
        assert!(gate.is_current(*all.last().unwrap()));
    }
}
