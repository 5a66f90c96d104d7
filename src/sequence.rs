//! Request Sequencing
//!
//! The poll timer and user actions can have the same resource in flight at
//! once. Each request takes a ticket; only a response newer than the last
//! applied one may overwrite the cache.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct RequestSeq {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a request about to be sent
    pub fn issue(&self) -> u64 {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        next
    }

    /// Returns true (and records the ticket) if this response may be applied
    pub fn accept(&self, ticket: u64) -> bool {
        if ticket > self.applied.get() {
            self.applied.set(ticket);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let seq = RequestSeq::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(seq.accept(a));
        assert!(seq.accept(b));
    }

    #[test]
    fn test_late_response_is_rejected() {
        let seq = RequestSeq::new();
        let older = seq.issue();
        let newer = seq.issue();
        assert!(seq.accept(newer));
        assert!(!seq.accept(older));
    }

    #[test]
    fn test_failed_newer_request_does_not_block_older() {
        let seq = RequestSeq::new();
        let older = seq.issue();
        let _failed = seq.issue();
        assert!(seq.accept(older));
    }
}
