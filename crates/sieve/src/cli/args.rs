//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use std::path::PathBuf;

use clap::Parser;

use super::types::{RuleArg, StrategyArg};

/// Arguments for the `filter` command
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    /// CSV file to read, or `-` for stdin
    ///
    /// Defaults to the `data-file` from the configuration. A missing file
    /// is treated as an empty document.
    pub input: Option<String>,

    /// Filtering strategy (defaults to the configured strategy)
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Retention rule (defaults to the configured rule)
    #[arg(short, long, value_enum)]
    pub rule: Option<RuleArg>,

    /// List dropped rows and the reason for each on stderr
    #[arg(short, long)]
    pub explain: bool,

    /// Write the filtered document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `bench` command
#[derive(Parser, Debug, Clone)]
pub struct BenchArgs {
    /// CSV file to benchmark on, or `-` for stdin
    pub input: Option<String>,

    /// Retention rule (defaults to the configured rule)
    #[arg(short, long, value_enum)]
    pub rule: Option<RuleArg>,

    /// Strategies to compare (repeatable; defaults to all)
    #[arg(short, long, value_enum)]
    pub strategy: Vec<StrategyArg>,

    /// Timed passes per strategy
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: Option<u32>,

    /// Untimed warmup passes per strategy
    #[arg(short, long)]
    pub warmup: Option<u32>,
}
