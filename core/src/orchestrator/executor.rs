//! Orchestrator execution logic

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tokio::sync::{broadcast, mpsc};

use crate::channel::ChannelConfig;
use crate::config::BenchmarkConfig;
use crate::error::{BenchError, BenchResult};
use crate::summary::Summary;
use crate::traits::HttpClient;
use crate::worker::{ClaimGate, WorkerBuilder, WorkerStats};

use super::aggregator::aggregate_results;

/// Orchestrator manages the benchmark lifecycle
///
/// Responsible for spawning workers and the aggregator, coordinating
/// shutdown, and returning the final [`Summary`]. The claim gate, result
/// channel and summary are created per call to [`Orchestrator::run`], so an
/// orchestrator can be run any number of times.
pub struct Orchestrator {
    /// Benchmark configuration
    pub(crate) config: BenchmarkConfig,

    /// HTTP client (shared across workers)
    pub(crate) client: Arc<dyn HttpClient>,

    /// Result channel sizing
    pub(crate) channel_config: ChannelConfig,

    /// Shutdown signal sender
    pub(crate) shutdown_tx: broadcast::Sender<()>,
}

impl Orchestrator {
    /// Create a new orchestrator
    ///
    /// Use `OrchestratorBuilder` for a more ergonomic construction.
    pub fn new(
        config: BenchmarkConfig,
        client: Arc<dyn HttpClient>,
        channel_config: ChannelConfig,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            client,
            channel_config,
            shutdown_tx,
        }
    }

    /// Get a shutdown signal receiver
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Trigger shutdown of all workers
    ///
    /// Only affects a run in progress. A signal sent while no run is active
    /// is discarded, and the next [`Orchestrator::run`] starts normally.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Get the benchmark configuration
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run the benchmark
    ///
    /// Spawns the aggregator and `min(concurrency, total_requests)` workers,
    /// waits for both, and returns the summary. Exactly `total_requests` results are folded
    /// unless shutdown is signalled first.
    pub async fn run(&self) -> BenchResult<Summary> {
        let started = Instant::now();
        let summary = Summary::empty(&self.config);

        if self.config.is_empty() {
            tracing::info!(
                total_requests = self.config.total_requests,
                concurrency = self.config.concurrency,
                "Nothing to do, returning empty summary"
            );
            return Ok(summary);
        }

        let total = self.config.total_requests;
        let concurrency = self.config.concurrency;
        // Workers beyond the request count could never win a claim
        let workers = concurrency.min(total);

        tracing::info!(
            url = %self.config.target.raw_url,
            total_requests = total,
            concurrency,
            workers,
            client = self.client.name(),
            "Starting benchmark"
        );

        let (results_tx, results_rx) = mpsc::channel(self.channel_config.capacity_for(total));
        let gate = Arc::new(ClaimGate::new(total));
        let url: Arc<str> = Arc::from(self.config.target.raw_url.as_str());

        // The aggregator drains while workers run, so the bounded channel
        // can never fill up against an idle consumer.
        let aggregator = tokio::spawn(aggregate_results(results_rx, summary, started));

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let worker = WorkerBuilder::new(worker_id)
                .client(Arc::clone(&self.client))
                .url(Arc::clone(&url))
                .results_tx(results_tx.clone())
                .gate(Arc::clone(&gate))
                .build()?;
            let shutdown_rx = self.shutdown_tx.subscribe();

            handles.push(tokio::spawn(async move { worker.run(shutdown_rx).await }));
        }

        // Only workers hold senders now; the channel closes when the last one exits
        drop(results_tx);

        let mut totals = WorkerStats::new();
        let mut idle_workers = 0;
        for (idx, handle) in join_all(handles).await.into_iter().enumerate() {
            match handle {
                Ok(stats) => {
                    if stats.total_requests() == 0 {
                        idle_workers += 1;
                    }
                    totals.merge(&stats);
                }
                Err(e) => {
                    tracing::error!(worker_id = idx, error = %e, "Worker task panicked");
                }
            }
        }

        let summary = aggregator
            .await
            .map_err(|e| BenchError::orchestration(format!("aggregator task failed: {e}")))?;

        if !summary.is_complete() {
            tracing::warn!(
                issued = summary.requests_issued,
                requested = summary.requests_requested,
                "Benchmark stopped before all requests were issued"
            );
        }

        tracing::info!(
            elapsed_secs = summary.wall_clock_duration_secs,
            issued = summary.requests_issued,
            succeeded = summary.requests_succeeded,
            transport_errors = totals.transport_errors,
            idle_workers,
            rps = summary.requests_per_second(),
            "Benchmark completed"
        );

        Ok(summary)
    }

    /// Run with Ctrl+C signal handling
    ///
    /// Ctrl+C triggers a graceful shutdown and a partial summary.
    pub async fn run_with_signal_handling(&self) -> BenchResult<Summary> {
        let shutdown_tx = self.shutdown_tx.clone();

        let signal_handle = tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
                    let _ = shutdown_tx.send(());
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                }
            }
        });

        let result = self.run().await;

        signal_handle.abort();

        result
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .field("client", &self.client.name())
            .field("channel_config", &self.channel_config)
            .finish()
    }
}
