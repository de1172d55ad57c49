//! JSON report export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mb_core::{Scheme, Summary};

/// Errors while writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// File could not be created or written
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat, self-describing view of a summary with every derived value filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// URL as given on the command line
    pub url: String,
    /// http or https
    pub scheme: Scheme,
    /// Server host name
    pub hostname: String,
    /// Server port
    pub port: u16,
    /// Request path
    pub path: String,
    /// Worker count
    pub concurrency: usize,
    /// Requests asked for
    pub requests_requested: usize,
    /// Requests sent
    pub requests_issued: usize,
    /// Requests with a 2xx or 3xx status
    pub requests_succeeded: usize,
    /// Requests that failed
    pub requests_failed: usize,
    /// False when the run was interrupted
    pub complete: bool,
    /// Wall clock duration of the run
    pub time_taken_secs: f64,
    /// Sum of per-request durations
    pub total_request_time_secs: f64,
    /// Throughput
    pub requests_per_second: f64,
    /// Mean latency
    pub time_per_request_secs: f64,
    /// Mean body size
    pub document_length_bytes: u64,
    /// Body bytes received
    pub total_transferred_bytes: u64,
    /// Body kilobytes received
    pub total_transferred_kb: f64,
    /// Kilobytes per second
    pub transfer_rate_kbps: f64,
}

impl From<&Summary> for JsonReport {
    fn from(s: &Summary) -> Self {
        Self {
            started_at: s.started_at,
            url: s.target.raw_url.clone(),
            scheme: s.target.scheme,
            hostname: s.target.hostname.clone(),
            port: s.target.port,
            path: s.target.path.clone(),
            concurrency: s.concurrency,
            requests_requested: s.requests_requested,
            requests_issued: s.requests_issued,
            requests_succeeded: s.requests_succeeded,
            requests_failed: s.failed_requests(),
            complete: s.is_complete(),
            time_taken_secs: s.wall_clock_duration_secs,
            total_request_time_secs: s.total_request_duration_secs,
            requests_per_second: s.requests_per_second(),
            time_per_request_secs: s.mean_time_per_request(),
            document_length_bytes: s.mean_document_length(),
            total_transferred_bytes: s.total_bytes_received,
            total_transferred_kb: s.total_transferred_kb(),
            transfer_rate_kbps: s.transfer_rate_kbps(),
        }
    }
}

impl JsonReport {
    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to `path`, replacing any existing file
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
