//! Shared termination gate

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counter of requests issued so far, shared by every worker of a run
///
/// Claiming compares and increments in one atomic step, so across all
/// workers exactly `total` claims succeed.
#[derive(Debug)]
pub struct ClaimGate {
    issued: AtomicUsize,
    total: usize,
}

impl ClaimGate {
    /// Gate that admits `total` claims
    pub fn new(total: usize) -> Self {
        Self {
            issued: AtomicUsize::new(0),
            total,
        }
    }

    /// Claim one unit of work
    ///
    /// Returns `false` without touching the counter once `total` is reached.
    pub fn try_claim(&self) -> bool {
        self.issued
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |issued| {
                (issued < self.total).then_some(issued + 1)
            })
            .is_ok()
    }

    /// Claims granted so far
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::Acquire)
    }

    /// Claim limit
    pub fn total(&self) -> usize {
        self.total
    }

    /// No claims left
    pub fn is_exhausted(&self) -> bool {
        self.issued() >= self.total
    }
}
