//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use std::io::{self, Write};

use anyhow::Result;
use sieve_csv::{NullRowFilter, Strategy};

use super::args::{BenchArgs, FilterArgs};
use crate::bench::{self, BenchOptions};
use crate::config::SieveConfig;
use crate::output::{self, OutputMode};
use crate::provider::{self, CsvFileProvider};

/// Load the document named on the command line, or the configured data file.
async fn load_document(input: Option<&str>, config: &SieveConfig) -> Result<String> {
    let document = match input {
        Some("-") => provider::read_stdin().await?,
        Some(path) => CsvFileProvider::new(path).retrieve().await?,
        None => CsvFileProvider::new(&config.data_file).retrieve().await?,
    };
    Ok(document)
}

/// Execute the filter command
pub async fn execute_filter(
    config: &SieveConfig,
    args: &FilterArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let mut filter = config.filter();
    if let Some(strategy) = args.strategy {
        filter = filter.with_strategy(strategy.into());
    }
    if let Some(rule) = args.rule {
        filter = filter.with_rule(rule.into());
    }

    let document = load_document(args.input.as_deref(), config).await?;
    let filtered = filter.filter(&document);
    let dropped = args.explain.then(|| filter.explain(&document));

    tracing::info!(
        strategy = %filter.strategy(),
        rule = %filter.rule(),
        input_bytes = document.len(),
        output_bytes = filtered.len(),
        "Filtered document"
    );

    if let Some(path) = &args.output {
        tokio::fs::write(path, &filtered).await?;
        tracing::info!(path = %path.display(), "Wrote filtered document");
    }

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "strategy": filter.strategy(),
                "rule": filter.rule(),
                "output": args.output.is_none().then_some(&filtered),
                "dropped": dropped,
            }))?;
        }
        OutputMode::Text => {
            if args.output.is_none() {
                let mut stdout = io::stdout().lock();
                output::write_document(&mut stdout, &filtered)?;
                stdout.flush()?;
            }
            if let Some(dropped) = &dropped {
                output::write_explanation(&mut io::stderr().lock(), dropped)?;
            }
        }
    }

    Ok(())
}

/// Execute the bench command
pub async fn execute_bench(
    config: &SieveConfig,
    args: &BenchArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let document = load_document(args.input.as_deref(), config).await?;
    if document.is_empty() {
        tracing::warn!("Benchmarking an empty document");
    }

    let rule = args.rule.map_or(config.rule, Into::into);
    let strategies: Vec<Strategy> = if args.strategy.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategy.iter().copied().map(Into::into).collect()
    };
    let options = BenchOptions {
        warmup: args.warmup.unwrap_or(config.bench.warmup),
        iterations: args.iterations.unwrap_or(config.bench.iterations),
    };

    let report = bench::run(&document, rule, &strategies, options)?;

    match output_mode {
        OutputMode::Json => output::print_json(&report)?,
        OutputMode::Text => output::write_bench_report(&mut io::stdout().lock(), &report)?,
    }

    Ok(())
}

/// Execute the strategies command
pub fn execute_strategies(output_mode: OutputMode) -> Result<()> {
    match output_mode {
        OutputMode::Json => {
            let strategies: Vec<_> = Strategy::ALL
                .iter()
                .map(|s| serde_json::json!({ "name": s, "description": s.description() }))
                .collect();
            let rules: Vec<_> = sieve_csv::RetentionRule::ALL
                .iter()
                .map(|r| serde_json::json!({ "name": r, "description": r.description() }))
                .collect();
            output::print_json(&serde_json::json!({
                "strategies": strategies,
                "rules": rules,
                "default": NullRowFilter::default(),
            }))?;
        }
        OutputMode::Text => output::write_catalog(&mut io::stdout().lock())?,
    }
    Ok(())
}
