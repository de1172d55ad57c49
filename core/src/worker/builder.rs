//! Builder pattern for Worker construction

use crate::error::{BenchError, BenchResult};
use crate::metrics::RequestResult;
use crate::traits::HttpClient;

use super::executor::Worker;
use super::gate::ClaimGate;

use std::sync::Arc;
use tokio::sync::mpsc;

/// Builder for creating Worker instances
///
/// # Example
/// ```ignore
/// let worker = WorkerBuilder::new(0)
///     .client(client)
///     .url(url)
///     .results_tx(tx)
///     .gate(gate)
///     .build()?;
/// ```
pub struct WorkerBuilder {
    id: usize,
    client: Option<Arc<dyn HttpClient>>,
    url: Option<Arc<str>>,
    results_tx: Option<mpsc::Sender<RequestResult>>,
    gate: Option<Arc<ClaimGate>>,
}

impl WorkerBuilder {
    /// Create a new builder with the given worker ID
    pub fn new(id: usize) -> Self {
        Self {
            id,
            client: None,
            url: None,
            results_tx: None,
            gate: None,
        }
    }

    /// Set the HTTP client
    pub fn client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the target URL
    pub fn url(mut self, url: Arc<str>) -> Self {
        self.url = Some(url);
        self
    }

    /// Set the result channel sender
    pub fn results_tx(mut self, tx: mpsc::Sender<RequestResult>) -> Self {
        self.results_tx = Some(tx);
        self
    }

    /// Set the shared claim gate
    pub fn gate(mut self, gate: Arc<ClaimGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Build the Worker
    ///
    /// # Errors
    /// Returns an error if any field is missing.
    pub fn build(self) -> BenchResult<Worker> {
        let client = self.client.ok_or(BenchError::missing_config("client"))?;
        let url = self.url.ok_or(BenchError::missing_config("url"))?;
        let results_tx = self
            .results_tx
            .ok_or(BenchError::missing_config("results_tx"))?;
        let gate = self.gate.ok_or(BenchError::missing_config("gate"))?;

        Ok(Worker::new(self.id, client, url, results_tx, gate))
    }
}
