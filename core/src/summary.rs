//! Benchmark summary and derived statistics
//!
//! A [`Summary`] stores only sums and counts. Rates and means are computed on
//! demand, so they are pure functions of a finished summary and every divisor
//! is guarded: an empty or instantaneous run reports 0.0 rather than NaN or
//! infinity.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{BenchmarkConfig, TargetDescriptor};
use crate::metrics::RequestResult;

/// Aggregate of every result folded during one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Requests the run was asked to make
    pub requests_requested: usize,
    /// Results folded so far
    pub requests_issued: usize,
    /// Results whose status was in [200, 400)
    pub requests_succeeded: usize,
    /// Sum of per-request durations
    pub total_request_duration_secs: f64,
    /// Engine start to last folded result
    pub wall_clock_duration_secs: f64,
    /// Sum of body bytes
    pub total_bytes_received: u64,
    /// Worker count
    pub concurrency: usize,
    /// Destination of the run
    pub target: TargetDescriptor,
    /// When the engine started
    pub started_at: DateTime<Utc>,
}

impl Summary {
    /// Empty summary for `config`, stamped with the current time
    pub fn empty(config: &BenchmarkConfig) -> Self {
        Self {
            requests_requested: config.total_requests,
            requests_issued: 0,
            requests_succeeded: 0,
            total_request_duration_secs: 0.0,
            wall_clock_duration_secs: 0.0,
            total_bytes_received: 0,
            concurrency: config.concurrency,
            target: config.target.clone(),
            started_at: Utc::now(),
        }
    }

    /// Add one result
    pub fn fold(&mut self, result: &RequestResult) {
        self.requests_issued += 1;
        if result.succeeded {
            self.requests_succeeded += 1;
        }
        self.total_request_duration_secs += result.duration_secs;
        self.total_bytes_received += result.bytes_received;
    }

    /// Record the elapsed wall clock time
    pub fn finish(&mut self, wall_clock: Duration) {
        self.wall_clock_duration_secs = wall_clock.as_secs_f64();
    }

    /// Every requested attempt was accounted for
    pub fn is_complete(&self) -> bool {
        self.requests_issued == self.requests_requested
    }

    /// Issued minus succeeded
    pub fn failed_requests(&self) -> usize {
        self.requests_issued - self.requests_succeeded
    }

    /// Throughput over the whole run
    pub fn requests_per_second(&self) -> f64 {
        per_second(self.requests_issued as f64, self.wall_clock_duration_secs)
    }

    /// Mean per-request duration in seconds
    pub fn mean_time_per_request(&self) -> f64 {
        if self.requests_issued == 0 {
            0.0
        } else {
            self.total_request_duration_secs / self.requests_issued as f64
        }
    }

    /// Mean body size over all issued requests, failed ones included
    pub fn mean_document_length(&self) -> u64 {
        if self.requests_issued == 0 {
            0
        } else {
            self.total_bytes_received / self.requests_issued as u64
        }
    }

    /// Total body bytes in kilobytes (1000 bytes)
    pub fn total_transferred_kb(&self) -> f64 {
        self.total_bytes_received as f64 / 1000.0
    }

    /// Kilobytes per second over the whole run
    pub fn transfer_rate_kbps(&self) -> f64 {
        per_second(self.total_transferred_kb(), self.wall_clock_duration_secs)
    }
}

fn per_second(amount: f64, secs: f64) -> f64 {
    if secs > 0.0 {
        amount / secs
    } else {
        0.0
    }
}
