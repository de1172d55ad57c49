//! Mock HTTP client shared by the engine tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpResponse, TransportError};

/// Scripted client: cycles through `statuses`, optionally sleeping and
/// failing at the transport level every `fail_every` calls
pub(crate) struct MockHttpClient {
    statuses: Vec<u16>,
    body_len: u64,
    delay: Option<Duration>,
    fail_every: Option<usize>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    successes: AtomicUsize,
}

impl MockHttpClient {
    pub(crate) fn new(status: u16) -> Self {
        Self::cycling(vec![status])
    }

    pub(crate) fn cycling(statuses: Vec<u16>) -> Self {
        Self {
            statuses,
            body_len: 100,
            delay: None,
            fail_every: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            successes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn with_fail_every(mut self, n: usize) -> Self {
        self.fail_every = Some(n);
        self
    }

    pub(crate) fn with_body_len(mut self, len: u64) -> Self {
        self.body_len = len;
        self
    }

    /// GETs started
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of GETs observed in flight at once
    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// 2xx/3xx responses handed out
    pub(crate) fn successes(&self) -> usize {
        self.successes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
        let count = self.calls.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        match self.delay {
            Some(delay) => tokio::time::sleep(delay).await,
            None => tokio::task::yield_now().await,
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(fail_every) = self.fail_every {
            if (count + 1) % fail_every == 0 {
                return Err(TransportError::Connection("simulated refusal".to_string()));
            }
        }

        let response = HttpResponse::new(self.statuses[count % self.statuses.len()], self.body_len);
        if response.is_success() {
            self.successes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(response)
    }
}
