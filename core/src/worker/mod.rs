//! Worker module for executing benchmark requests
//!
//! The Worker is the execution unit of mb, responsible for the simple but
//! critical loop: **claim -> GET -> report -> repeat**.
//!
//! Each Worker is a tokio task that:
//!
//! 1. Claims one unit of work from the shared [`ClaimGate`]
//! 2. Issues a GET through the shared [`crate::HttpClient`]
//! 3. Times it and turns the outcome into a [`crate::RequestResult`]
//! 4. Sends the result to the aggregator via channel
//! 5. Repeats until the gate is exhausted or shutdown is signalled
//!
//! Transport errors do not stop a worker; they are reported as failed results.
//!
//! # Example
//!
//! ```ignore
//! use mb_core::worker::{ClaimGate, WorkerBuilder};
//!
//! let worker = WorkerBuilder::new(0)
//!     .client(client)
//!     .url(Arc::from("http://localhost:8080/"))
//!     .results_tx(tx)
//!     .gate(Arc::new(ClaimGate::new(100)))
//!     .build()?;
//!
//! let stats = worker.run(shutdown_rx).await;
//! println!("Succeeded: {}", stats.succeeded);
//! ```

mod builder;
mod executor;
mod gate;
mod stats;

pub use builder::WorkerBuilder;
pub use executor::Worker;
pub use gate::ClaimGate;
pub use stats::WorkerStats;
