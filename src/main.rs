//! mb - minimal HTTP load-testing tool
//!
//! Sends a fixed number of GET requests to one URL with a fixed number of
//! concurrent workers and prints a summary.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    let default_filter = if cli.verbose {
        "warn,mb=debug,mb_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    cli.run().await
}
