//! Builder pattern for Orchestrator construction

use std::sync::Arc;

use crate::channel::ChannelConfig;
use crate::config::BenchmarkConfig;
use crate::error::{BenchError, BenchResult};
use crate::traits::HttpClient;

use super::executor::Orchestrator;

/// Builder for creating an Orchestrator with proper configuration
///
/// # Example
///
/// ```ignore
/// let orchestrator = OrchestratorBuilder::new()
///     .config(BenchmarkConfig::from_flags(1000, 10, "http://localhost:8080/")?)
///     .client(Arc::new(ReqwestClient::new()))
///     .build()?;
/// ```
pub struct OrchestratorBuilder {
    config: Option<BenchmarkConfig>,
    client: Option<Arc<dyn HttpClient>>,
    channel_config: ChannelConfig,
}

impl OrchestratorBuilder {
    /// Create a new orchestrator builder
    pub fn new() -> Self {
        Self {
            config: None,
            client: None,
            channel_config: ChannelConfig::default(),
        }
    }

    /// Set the benchmark configuration
    pub fn config(mut self, config: BenchmarkConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the HTTP client
    pub fn client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the channel configuration
    pub fn channel_config(mut self, config: ChannelConfig) -> Self {
        self.channel_config = config;
        self
    }

    /// Build the orchestrator
    ///
    /// # Errors
    ///
    /// Returns an error if config or client are not set.
    pub fn build(self) -> BenchResult<Orchestrator> {
        let config = self
            .config
            .ok_or_else(|| BenchError::missing_config("config"))?;

        let client = self
            .client
            .ok_or_else(|| BenchError::missing_config("client"))?;

        Ok(Orchestrator::new(config, client, self.channel_config))
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
