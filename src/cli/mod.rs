//! CLI argument parsing and command handling

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use mb_core::{BenchmarkConfig, ConfigError, OrchestratorBuilder, ReqwestClient};
use mb_report::{render_text, JsonReport};

/// mb - minimal HTTP load-testing tool
#[derive(Parser, Debug)]
#[command(name = "mb")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "mb [options] http[s]://hostname[:port]/path")]
pub struct Cli {
    /// Target URL
    pub url: String,

    /// Number of requests to perform
    #[arg(short = 'n', long, default_value_t = 1, allow_negative_numbers = true)]
    pub requests: i64,

    /// Number of requests to perform at a time
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub concurrency: i64,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate flags into a run configuration
    pub fn benchmark_config(&self) -> Result<BenchmarkConfig, ConfigError> {
        BenchmarkConfig::from_flags(self.requests, self.concurrency, &self.url)
    }

    /// Run the benchmark and print the report
    ///
    /// Invalid flags are reported with usage on stderr and a failing exit
    /// code; they are not an `Err`.
    pub async fn run(self) -> Result<ExitCode> {
        let config = match self.benchmark_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                eprintln!("{}", Self::command().render_usage());
                return Ok(ExitCode::FAILURE);
            }
        };

        println!("Running benchmark on {}", config.target.raw_url);

        let orchestrator = OrchestratorBuilder::new()
            .config(config)
            .client(Arc::new(ReqwestClient::new()))
            .build()
            .context("Failed to set up benchmark")?;

        let summary = orchestrator
            .run_with_signal_handling()
            .await
            .context("Benchmark failed")?;

        let report = JsonReport::from(&summary);

        if self.json {
            println!("{}", report.to_json_pretty()?);
        } else {
            println!();
            print!("{}", render_text(&summary));
        }

        if let Some(path) = &self.export {
            report
                .write_to(path)
                .with_context(|| format!("Failed to export report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report exported");
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mb", "http://localhost:8080/"]).unwrap();

        assert_eq!(cli.requests, 1);
        assert_eq!(cli.concurrency, 1);
        assert!(!cli.json);
        assert!(!cli.verbose);
        assert!(cli.export.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "mb",
            "-n",
            "1000",
            "-c",
            "50",
            "--json",
            "--export",
            "out.json",
            "-v",
            "https://example.com/",
        ])
        .unwrap();

        assert_eq!(cli.requests, 1000);
        assert_eq!(cli.concurrency, 50);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.export, Some(PathBuf::from("out.json")));

        let config = cli.benchmark_config().unwrap();
        assert_eq!(config.total_requests, 1000);
        assert_eq!(config.target.port, 443);
    }

    #[test]
    fn test_missing_url_is_rejected() {
        assert!(Cli::try_parse_from(["mb", "-n", "10"]).is_err());
    }

    #[test]
    fn test_negative_requests_rejected_by_config() {
        let cli = Cli::try_parse_from(["mb", "-n", "-5", "http://localhost/"]).unwrap();

        let err = cli.benchmark_config().unwrap_err();
        assert_eq!(err, ConfigError::NegativeRequests(-5));
        assert_eq!(
            err.to_string(),
            "invalid value -5 for flag -n: must be positive"
        );
    }

    #[test]
    fn test_negative_concurrency_rejected_by_config() {
        let cli = Cli::try_parse_from(["mb", "-c", "-1", "http://localhost/"]).unwrap();

        let err = cli.benchmark_config().unwrap_err();
        assert_eq!(err, ConfigError::NegativeConcurrency(-1));
    }

    #[test]
    fn test_invalid_url_rejected_by_config() {
        let cli = Cli::try_parse_from(["mb", "localhost:8080"]).unwrap();

        let err = cli.benchmark_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'localhost:8080': must be a valid URI"
        );
    }

    #[tokio::test]
    async fn test_run_with_invalid_flags_fails() {
        let cli = Cli::try_parse_from(["mb", "-n", "-1", "http://localhost/"]).unwrap();

        let code = cli.run().await.unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_run_zero_requests_exports_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let cli = Cli::try_parse_from([
            "mb",
            "-n",
            "0",
            "--export",
            path.to_str().unwrap(),
            "http://localhost:1/",
        ])
        .unwrap();

        let code = cli.run().await.unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let report: JsonReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.requests_issued, 0);
        assert_eq!(report.port, 1);
    }
}
