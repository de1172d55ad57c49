//! reqwest-backed [`HttpClient`]

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpResponse, TransportError};

/// Production client: reqwest with its default configuration
///
/// Redirects are followed and no request timeout is set. One instance is
/// shared by every worker so connections are pooled.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with reqwest defaults
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Wrap an existing reqwest client
    pub fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.inner.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse::new(status, body.len() as u64))
    }
}
