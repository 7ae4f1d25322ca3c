//! Sieve CLI binary.

use std::process::ExitCode;

use colored::Colorize;
use sieve::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the sieve CLI.
///
/// Uses tokio's current_thread runtime; the only async work is file I/O.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Logs go to stderr so stdout carries only the filtered document.
    // RUST_LOG overrides -v, e.g. RUST_LOG=sieve_csv=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting sieve CLI");

    match cli.execute().await {
        Ok(()) => {
            tracing::debug!("Sieve CLI completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}
