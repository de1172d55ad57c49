//! Core trait for the HTTP client used by workers
//!
//! The engine only knows about [`HttpClient`]; the production implementation
//! lives in [`crate::client`], tests plug in their own.

use async_trait::async_trait;

/// Outcome of a GET that produced an HTTP response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Number of body bytes read
    pub body_len: u64,
}

impl HttpResponse {
    /// Create a response summary
    pub fn new(status: u16, body_len: u64) -> Self {
        Self { status, body_len }
    }

    /// 2xx and 3xx count as success; everything else is a failed request
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

/// Client that performs one GET per call, awaited to completion by the worker
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Client identifier for logs
    fn name(&self) -> &str;

    /// Issue a GET and read the whole body
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Failures below the HTTP status level
///
/// Workers never propagate these; they become failed results.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Error reported by reqwest (DNS, connect, TLS, redirect loop)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response started but the body could not be read
    #[error("failed to read body: {0}")]
    Body(String),

    /// Connection failure reported by a non-reqwest client
    #[error("connection error: {0}")]
    Connection(String),
}
