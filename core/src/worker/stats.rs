//! Worker statistics tracking

use std::time::Instant;

use crate::metrics::RequestResult;

/// Statistics tracked by each worker
///
/// Diagnostic only: the run's [`crate::Summary`] is built by the aggregator,
/// not from these.
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Requests whose status was in [200, 400)
    pub succeeded: usize,

    /// Error statuses and transport failures
    pub failed: usize,

    /// Transport failures only
    pub transport_errors: usize,

    /// Worker start time
    pub started_at: Option<Instant>,

    /// Worker end time
    pub ended_at: Option<Instant>,
}

impl WorkerStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking (records start time)
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop tracking (records end time)
    pub fn stop(&mut self) {
        self.ended_at = Some(Instant::now());
    }

    /// Requests this worker completed
    pub fn total_requests(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Count one finished attempt
    pub fn record(&mut self, result: &RequestResult, transport_error: bool) {
        if result.succeeded {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        if transport_error {
            self.transport_errors += 1;
        }
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        self.started_at.map(|start| {
            self.ended_at
                .map(|end| end.duration_since(start))
                .unwrap_or_else(|| start.elapsed())
        })
    }

    /// Merge stats from another worker
    pub fn merge(&mut self, other: &WorkerStats) {
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.transport_errors += other.transport_errors;
    }
}
