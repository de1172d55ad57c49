//! Worker execution loop

use crate::metrics::RequestResult;
use crate::traits::HttpClient;

use super::gate::ClaimGate;
use super::stats::WorkerStats;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};

/// Worker executes requests in a loop: claim -> GET -> report -> repeat
///
/// Workers share the client, the target URL and the claim gate via `Arc`,
/// and hand each result to the aggregator through an mpsc channel.
pub struct Worker {
    /// Unique worker identifier
    id: usize,

    /// HTTP client (shared across workers via Arc)
    client: Arc<dyn HttpClient>,

    /// URL every request is sent to
    url: Arc<str>,

    /// Channel sender for request results
    results_tx: mpsc::Sender<RequestResult>,

    /// Shared termination gate
    gate: Arc<ClaimGate>,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: usize,
        client: Arc<dyn HttpClient>,
        url: Arc<str>,
        results_tx: mpsc::Sender<RequestResult>,
        gate: Arc<ClaimGate>,
    ) -> Self {
        Self {
            id,
            client,
            url,
            results_tx,
            gate,
        }
    }

    /// Run the worker loop
    ///
    /// Returns when the gate is exhausted, the shutdown signal fires, or the
    /// aggregator has gone away. A worker that loses every claim race exits
    /// immediately with empty stats.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> WorkerStats {
        let mut stats = WorkerStats::new();
        stats.start();

        tracing::debug!(worker_id = self.id, "Worker started");

        loop {
            if shutdown_requested(&mut shutdown) {
                tracing::debug!(worker_id = self.id, "Worker received shutdown signal");
                break;
            }

            if !self.gate.try_claim() {
                tracing::debug!(
                    worker_id = self.id,
                    "No more requests to claim, worker stopping"
                );
                break;
            }

            tokio::select! {
                biased;

                _ = shutdown.recv() => {
                    tracing::debug!(worker_id = self.id, "Worker received shutdown signal");
                    break;
                }

                (result, transport_error) = self.execute_one() => {
                    stats.record(&result, transport_error);

                    if self.results_tx.send(result).await.is_err() {
                        tracing::debug!(
                            worker_id = self.id,
                            "Result channel closed, worker stopping"
                        );
                        break;
                    }
                }
            }
        }

        stats.stop();
        tracing::debug!(
            worker_id = self.id,
            succeeded = stats.succeeded,
            failed = stats.failed,
            transport_errors = stats.transport_errors,
            elapsed_ms = ?stats.elapsed().map(|d| d.as_millis()),
            "Worker finished"
        );

        stats
    }

    /// Perform one GET and time it
    ///
    /// The flag is true when the client failed below the HTTP level.
    async fn execute_one(&self) -> (RequestResult, bool) {
        let start = Instant::now();
        let outcome = self.client.get(&self.url).await;
        let elapsed = start.elapsed();

        if let Err(e) = &outcome {
            tracing::debug!(worker_id = self.id, error = %e, "Request failed");
        }

        (RequestResult::from_outcome(&outcome, elapsed), outcome.is_err())
    }

    /// Get the worker ID
    pub fn id(&self) -> usize {
        self.id
    }
}

/// Non-blocking check of the shutdown channel
///
/// A closed channel counts as shutdown, matching what `recv` does in the
/// select below.
fn shutdown_requested(shutdown: &mut broadcast::Receiver<()>) -> bool {
    !matches!(
        shutdown.try_recv(),
        Err(broadcast::error::TryRecvError::Empty)
    )
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("client", &self.client.name())
            .field("url", &self.url)
            .field("gate", &self.gate)
            .finish()
    }
}
