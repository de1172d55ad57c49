//! Orchestrator for benchmark lifecycle management
//!
//! The Orchestrator coordinates one benchmark run:
//! - Creating the claim gate, result channel and empty summary
//! - Spawning the aggregator and the worker tasks
//! - Managing graceful shutdown via a broadcast channel
//! - Returning the folded summary
//!
//! A run moves through Idle, Dispatching (workers spawned), Draining
//! (aggregator folding) and Complete; the returned [`crate::Summary`] is owned
//! by the caller and no longer touched by the engine.
//!
//! # Example
//!
//! ```ignore
//! use mb_core::{BenchmarkConfig, OrchestratorBuilder, ReqwestClient};
//!
//! let orchestrator = OrchestratorBuilder::new()
//!     .config(BenchmarkConfig::from_flags(1000, 10, "http://localhost:8080/")?)
//!     .client(Arc::new(ReqwestClient::new()))
//!     .build()?;
//!
//! let summary = orchestrator.run_with_signal_handling().await?;
//! ```

mod aggregator;
mod builder;
mod executor;

pub use aggregator::aggregate_results;
pub use builder::OrchestratorBuilder;
pub use executor::Orchestrator;

use std::sync::Arc;

use crate::client::ReqwestClient;
use crate::config::BenchmarkConfig;
use crate::error::BenchResult;
use crate::summary::Summary;
use crate::traits::HttpClient;

/// Run a benchmark to completion from synchronous code
///
/// Creates a multi-threaded tokio runtime and blocks until the summary is
/// ready. Must not be called from inside an async context.
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchResult<Summary> {
    run_benchmark_with(config, Arc::new(ReqwestClient::new()))
}

/// [`run_benchmark`] with a caller-supplied client
pub fn run_benchmark_with(
    config: &BenchmarkConfig,
    client: Arc<dyn HttpClient>,
) -> BenchResult<Summary> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let orchestrator = OrchestratorBuilder::new()
        .config(config.clone())
        .client(client)
        .build()?;

    runtime.block_on(orchestrator.run())
}
