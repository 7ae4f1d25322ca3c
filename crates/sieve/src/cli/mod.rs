//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for sieve using clap's derive API.
//!
//! # Commands
//!
//! - `filter`: Remove NULL rows from a CSV file and print the result
//! - `bench`: Time every strategy on the same file
//! - `strategies`: List strategies and retention rules
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Configuration file (defaults to `./sieve.yaml` if present)
//! - `-v`: Increase log verbosity (repeatable)
//!
//! # Example
//!
//! ```bash
//! sieve filter data.csv --rule header-aware --explain
//! cat data.csv | sieve filter - --strategy single-pass
//! sieve bench data.csv -n 500
//! ```

mod args;
mod execute;
mod types;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{BenchArgs, FilterArgs};
pub use types::{RuleArg, StrategyArg};

use crate::config::SieveConfig;
use crate::output::OutputMode;

/// Sieve - remove NULL rows from CSV text
///
/// Drops every row with a cell exactly equal to NULL, optionally also
/// dropping blank rows, and benchmarks the available algorithms.
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./sieve.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Remove NULL rows from a CSV document
    ///
    /// Reads the input file (or the configured data file), drops
    /// disqualified rows and prints the remaining rows unchanged.
    Filter(FilterArgs),

    /// Compare strategy performance on a CSV document
    ///
    /// Runs every strategy over the same input and ranks them from
    /// fastest to slowest by mean time per pass.
    Bench(BenchArgs),

    /// List available strategies and retention rules
    Strategies,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns a clap error if the arguments are invalid.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the requested verbosity.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[must_use]
    pub fn log_filter(&self) -> String {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        format!("sieve={level},sieve_csv={level}")
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input or output fails.
    pub async fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Commands::Filter(args) => {
                let config = self.load_config().await?;
                execute::execute_filter(&config, args, output_mode).await
            }
            Commands::Bench(args) => {
                let config = self.load_config().await?;
                execute::execute_bench(&config, args, output_mode).await
            }
            Commands::Strategies => execute::execute_strategies(output_mode),
        }
    }

    async fn load_config(&self) -> Result<SieveConfig> {
        let config = match &self.config {
            Some(path) => SieveConfig::load(path).await?,
            None => SieveConfig::discover(&std::env::current_dir()?).await?,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_filter_with_options() {
        let cli = Cli::try_parse_from([
            "sieve",
            "filter",
            "data.csv",
            "--strategy",
            "single-pass",
            "--rule",
            "header-aware",
            "--explain",
        ])
        .unwrap();

        let Commands::Filter(args) = cli.command else {
            panic!("expected filter command");
        };
        assert_eq!(args.input.as_deref(), Some("data.csv"));
        assert_eq!(args.strategy, Some(StrategyArg::SinglePass));
        assert_eq!(args.rule, Some(RuleArg::HeaderAware));
        assert!(args.explain);
        assert!(args.output.is_none());
    }

    #[test]
    fn parses_bench_with_repeated_strategies() {
        let cli = Cli::try_parse_from([
            "sieve", "bench", "-s", "indexed", "-s", "scan", "-n", "20", "--json",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Bench(args) = cli.command else {
            panic!("expected bench command");
        };
        assert_eq!(
            args.strategy,
            vec![StrategyArg::Indexed, StrategyArg::SinglePass]
        );
        assert_eq!(args.iterations, Some(20));
        assert_eq!(args.warmup, None);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(Cli::try_parse_from(["sieve", "bench", "-n", "0"]).is_err());
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["sieve", "filter", "-s", "regex"]).is_err());
    }

    #[test]
    fn requires_subcommand() {
        assert!(Cli::try_parse_from(["sieve"]).is_err());
    }

    #[rstest]
    #[case(&["sieve", "strategies"], "sieve=warn,sieve_csv=warn")]
    #[case(&["sieve", "-v", "strategies"], "sieve=info,sieve_csv=info")]
    #[case(&["sieve", "strategies", "-vv"], "sieve=debug,sieve_csv=debug")]
    #[case(&["sieve", "-vvvv", "strategies"], "sieve=trace,sieve_csv=trace")]
    fn verbosity_sets_log_filter(#[case] argv: &[&str], #[case] expected: &str) {
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.log_filter(), expected);
    }
}
