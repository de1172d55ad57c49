//! Human-readable text report

use std::fmt::Write;

use mb_core::Summary;

/// Render the summary in the classic `ab`-style layout
///
/// Floats are printed with two decimals. Every derived value comes from the
/// [`Summary`] accessors, so an empty run prints zeros.
pub fn render_text(summary: &Summary) -> String {
    let mut out = String::with_capacity(512);

    // Writing into a String cannot fail
    let _ = write_report(&mut out, summary);
    out
}

fn write_report(out: &mut String, s: &Summary) -> std::fmt::Result {
    writeln!(out, "Summary:")?;
    writeln!(out, "Server Hostname:\t{}", s.target.hostname)?;
    writeln!(out, "Server Port:\t\t{}", s.target.port)?;
    writeln!(out)?;
    writeln!(out, "Document Path:\t\t{}", s.target.path)?;
    writeln!(out, "Document Length:\t{} (bytes)", s.mean_document_length())?;
    writeln!(out)?;
    writeln!(out, "Concurrency Level:\t{}", s.concurrency)?;
    writeln!(out, "Requests sent:\t\t{}", s.requests_issued)?;
    writeln!(out, "Complete requests:\t{}", s.requests_succeeded)?;
    writeln!(out, "Failed requests:\t{}", s.failed_requests())?;
    writeln!(out, "Time taken for tests:\t{:.2} (s)", s.wall_clock_duration_secs)?;
    writeln!(out, "Requests per second:\t{:.2} (requests/s)", s.requests_per_second())?;
    writeln!(out, "Time per requests:\t{:.2} (s)", s.mean_time_per_request())?;
    writeln!(out, "Total transferred:\t{:.2} (Kbytes)", s.total_transferred_kb())?;
    writeln!(out, "Transfer rate:\t\t{:.2} (Kbytes/s)", s.transfer_rate_kbps())?;

    if !s.is_complete() {
        writeln!(out)?;
        writeln!(
            out,
            "Interrupted:\t\t{} of {} requests issued",
            s.requests_issued, s.requests_requested
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_core::{BenchmarkConfig, RequestResult};

    fn summary(total: usize, results: &[(bool, f64, u64)], wall_clock: f64) -> Summary {
        let config =
            BenchmarkConfig::from_flags(total as i64, 2, "http://example.com:8080/index.html")
                .unwrap();
        let mut summary = Summary::empty(&config);
        for &(succeeded, duration_secs, bytes_received) in results {
            summary.fold(&RequestResult {
                succeeded,
                duration_secs,
                bytes_received,
            });
        }
        summary.wall_clock_duration_secs = wall_clock;
        summary
    }

    #[test]
    fn test_render_full_report() {
        let s = summary(
            4,
            &[
                (true, 0.5, 3000),
                (true, 0.5, 3000),
                (false, 0.25, 1000),
                (false, 0.75, 0),
            ],
            2.0,
        );

        let text = render_text(&s);

        assert!(text.starts_with("Summary:\n"));
        assert!(text.contains("Server Hostname:\texample.com\n"));
        assert!(text.contains("Server Port:\t\t8080\n\n"));
        assert!(text.contains("Document Path:\t\t/index.html\n"));
        assert!(text.contains("Document Length:\t1750 (bytes)\n\n"));
        assert!(text.contains("Concurrency Level:\t2\n"));
        assert!(text.contains("Requests sent:\t\t4\n"));
        assert!(text.contains("Complete requests:\t2\n"));
        assert!(text.contains("Failed requests:\t2\n"));
        assert!(text.contains("Time taken for tests:\t2.00 (s)\n"));
        assert!(text.contains("Requests per second:\t2.00 (requests/s)\n"));
        assert!(text.contains("Time per requests:\t0.50 (s)\n"));
        assert!(text.contains("Total transferred:\t7.00 (Kbytes)\n"));
        assert!(text.contains("Transfer rate:\t\t3.50 (Kbytes/s)\n"));
        assert!(!text.contains("Interrupted"));
    }

    #[test]
    fn test_render_empty_run_prints_zeros() {
        let text = render_text(&summary(0, &[], 0.0));

        assert!(text.contains("Document Length:\t0 (bytes)"));
        assert!(text.contains("Requests sent:\t\t0\n"));
        assert!(text.contains("Requests per second:\t0.00 (requests/s)"));
        assert!(text.contains("Time per requests:\t0.00 (s)"));
        assert!(text.contains("Transfer rate:\t\t0.00 (Kbytes/s)"));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn test_render_marks_interrupted_run() {
        let text = render_text(&summary(10, &[(true, 0.1, 10)], 0.1));

        assert!(text.contains("Interrupted:\t\t1 of 10 requests issued"));
    }

    #[test]
    fn test_render_empty_path() {
        let config = BenchmarkConfig::from_flags(1, 1, "https://example.com").unwrap();
        let text = render_text(&Summary::empty(&config));

        assert!(text.contains("Server Port:\t\t443\n"));
        assert!(text.contains("Document Path:\t\t\n"));
    }
}
