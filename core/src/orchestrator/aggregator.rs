//! Single-consumer fold of request results into a Summary

use std::time::Instant;

use tokio::sync::mpsc;

use crate::metrics::RequestResult;
use crate::summary::Summary;

/// Drain `rx` into `summary` until every requested result has been folded
///
/// Stops early if the channel closes, which only happens when all workers
/// have exited without issuing the full count (shutdown or a panicked
/// worker). The wall clock is taken right after the last fold, measured from
/// `started`. With nothing requested it returns without waiting.
pub async fn aggregate_results(
    mut rx: mpsc::Receiver<RequestResult>,
    mut summary: Summary,
    started: Instant,
) -> Summary {
    let expected = summary.requests_requested;

    while summary.requests_issued < expected {
        match rx.recv().await {
            Some(result) => summary.fold(&result),
            None => {
                tracing::warn!(
                    folded = summary.requests_issued,
                    expected,
                    "Result channel closed before all requests were accounted for"
                );
                break;
            }
        }
    }

    summary.finish(started.elapsed());
    summary
}
