//! mb-core: concurrent HTTP benchmark engine
//!
//! This crate provides the engine behind the `mb` load tester:
//!
//! - Target parsing and run configuration
//! - The HTTP client seam and its reqwest implementation
//! - Workers sharing an atomic claim gate
//! - A single aggregator folding results into a [`Summary`]
//! - Derived statistics (throughput, latency, transfer rate)
//!
//! Runs are started with [`run_benchmark`] from synchronous code, or by
//! building an [`Orchestrator`] and awaiting [`Orchestrator::run`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod orchestrator;
pub mod summary;
pub mod traits;
pub mod worker;

#[cfg(test)]
mod mock;

pub use channel::ChannelConfig;
pub use client::ReqwestClient;
pub use config::{BenchmarkConfig, ConfigError, Scheme, TargetDescriptor};
pub use error::*;
pub use metrics::RequestResult;
pub use orchestrator::{run_benchmark, run_benchmark_with, Orchestrator, OrchestratorBuilder};
pub use summary::Summary;
pub use traits::*;
pub use worker::{ClaimGate, Worker, WorkerBuilder, WorkerStats};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::mock::MockHttpClient;
    use std::sync::Arc;

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_summary_json_format() {
        let config = BenchmarkConfig::from_flags(4, 2, "https://example.com/a").unwrap();
        let mut summary = Summary::empty(&config);
        summary.fold(&RequestResult {
            succeeded: true,
            duration_secs: 0.5,
            bytes_received: 2048,
        });

        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"requests_requested\":4"));
        assert!(json.contains("\"requests_issued\":1"));
        assert!(json.contains("\"scheme\":\"https\""));
        assert!(json.contains("\"port\":443"));

        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_config_json_format() {
        let config = BenchmarkConfig::from_flags(10, 3, "http://localhost:8080/x").unwrap();
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("\"total_requests\":10"));
        assert!(json.contains("\"concurrency\":3"));
        assert!(json.contains("\"hostname\":\"localhost\""));
    }

    // =========================================================================
    // End to end through the public API
    // =========================================================================

    #[tokio::test]
    async fn test_public_api_run() {
        let config = BenchmarkConfig::from_flags(20, 4, "http://localhost:9/").unwrap();
        let client = Arc::new(MockHttpClient::cycling(vec![200, 301, 404, 503]));

        let summary = OrchestratorBuilder::new()
            .config(config)
            .client(client)
            .build()
            .unwrap()
            .run()
            .await
            .unwrap();

        assert_eq!(summary.requests_issued, 20);
        assert_eq!(summary.requests_succeeded, 10);
        assert_eq!(summary.failed_requests(), 10);
        assert_eq!(summary.mean_document_length(), 100);
        assert!(summary.mean_time_per_request() >= 0.0);
    }

    #[test]
    fn test_config_error_converts_to_bench_error() {
        let err: BenchError = BenchmarkConfig::from_flags(-1, 1, "http://localhost/")
            .unwrap_err()
            .into();

        assert_eq!(err.kind, BenchErrorKind::Config);
        assert!(err.message.contains("-n"));
    }
}
