//! Per-request results sent from workers to the aggregator

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::traits::{HttpResponse, TransportError};

/// Result of one attempted request
///
/// Produced exactly once by the worker that made the attempt and moved to the
/// aggregator through the result channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestResult {
    /// Status was in [200, 400)
    pub succeeded: bool,
    /// Wall time of the attempt, up to the failure point for transport errors
    pub duration_secs: f64,
    /// Body bytes read, 0 on transport errors
    pub bytes_received: u64,
}

impl RequestResult {
    /// Build a result from what the client returned and how long it took
    pub fn from_outcome(outcome: &Result<HttpResponse, TransportError>, elapsed: Duration) -> Self {
        match outcome {
            Ok(response) => Self {
                succeeded: response.is_success(),
                duration_secs: elapsed.as_secs_f64(),
                bytes_received: response.body_len,
            },
            Err(_) => Self::failed(elapsed),
        }
    }

    /// A transport-level failure
    pub fn failed(elapsed: Duration) -> Self {
        Self {
            succeeded: false,
            duration_secs: elapsed.as_secs_f64(),
            bytes_received: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_success_response() {
        let outcome = Ok(HttpResponse::new(200, 512));
        let result = RequestResult::from_outcome(&outcome, Duration::from_millis(250));

        assert!(result.succeeded);
        assert_eq!(result.bytes_received, 512);
        assert!((result.duration_secs - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_from_error_status_keeps_bytes() {
        let outcome = Ok(HttpResponse::new(404, 9));
        let result = RequestResult::from_outcome(&outcome, Duration::from_millis(5));

        assert!(!result.succeeded);
        assert_eq!(result.bytes_received, 9);
    }

    #[test]
    fn test_from_transport_error() {
        let outcome = Err(TransportError::Connection("refused".to_string()));
        let result = RequestResult::from_outcome(&outcome, Duration::from_millis(30));

        assert!(!result.succeeded);
        assert_eq!(result.bytes_received, 0);
        assert!((result.duration_secs - 0.03).abs() < 1e-9);
    }
}
