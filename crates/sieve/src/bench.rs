//! In-process benchmark of the filtering strategies.
//!
//! Every selected strategy filters the same document under the same rule.
//! Each one gets a few untimed warmup passes followed by timed passes, and
//! the results are ranked fastest to slowest by mean time. The runner also
//! checks that all strategies produced identical output.
//!
//! For statistically rigorous numbers use the criterion benches in
//! `sieve-csv`; this runner answers "which is fastest on my file".

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize, Serializer};
use sieve_csv::document::rows;
use sieve_csv::{NullRowFilter, RetentionRule, Strategy};

use crate::error::{Error, Result};

/// Default number of untimed passes per strategy.
pub const DEFAULT_WARMUP: u32 = 3;

/// Default number of timed passes per strategy.
pub const DEFAULT_ITERATIONS: u32 = 50;

/// How many passes to run per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct BenchOptions {
    /// Untimed passes before measuring.
    pub warmup: u32,
    /// Timed passes; must be at least 1.
    pub iterations: u32,
}

impl BenchOptions {
    /// Checks that the options can produce a measurement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::Config(
                "bench iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            warmup: DEFAULT_WARMUP,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Measurements for one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyTiming {
    /// 1-based position when ordered fastest to slowest.
    pub rank: usize,
    /// The strategy measured.
    pub strategy: Strategy,
    /// Mean time per pass.
    #[serde(rename = "mean_ns", serialize_with = "as_nanos")]
    pub mean: Duration,
    /// Fastest pass.
    #[serde(rename = "min_ns", serialize_with = "as_nanos")]
    pub min: Duration,
    /// Slowest pass.
    #[serde(rename = "max_ns", serialize_with = "as_nanos")]
    pub max: Duration,
    /// Sum of all timed passes.
    #[serde(rename = "total_ns", serialize_with = "as_nanos")]
    pub total: Duration,
    /// Length of the filtered document in bytes.
    pub output_bytes: usize,
    /// Rows the filter retained.
    ///
    /// Counted from the rows judged, so a single retained empty row
    /// counts as one even though its text is empty.
    pub output_rows: usize,
}

/// Result of a benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// Rule every strategy applied.
    pub rule: RetentionRule,
    /// Size of the input document in bytes.
    pub input_bytes: usize,
    /// Rows in the input document.
    pub input_rows: usize,
    /// Passes run per strategy.
    pub options: BenchOptions,
    /// Whether every strategy produced the same output.
    pub consistent: bool,
    /// Timings, fastest first.
    pub results: Vec<StrategyTiming>,
}

impl BenchReport {
    /// The fastest strategy's timing.
    #[must_use]
    pub fn fastest(&self) -> Option<&StrategyTiming> {
        self.results.first()
    }
}

fn as_nanos<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u128(duration.as_nanos())
}

/// Times each strategy in `strategies` on `document` under `rule`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the options are invalid or no strategy
/// was selected.
pub fn run(
    document: &str,
    rule: RetentionRule,
    strategies: &[Strategy],
    options: BenchOptions,
) -> Result<BenchReport> {
    options.validate()?;
    let Some(&baseline) = strategies.first() else {
        return Err(Error::Config("no strategies selected".to_string()));
    };

    tracing::info!(
        %rule,
        strategies = strategies.len(),
        warmup = options.warmup,
        iterations = options.iterations,
        bytes = document.len(),
        "Starting benchmark"
    );

    let input_rows = rows(document).count();
    let dropped_rows = NullRowFilter::default()
        .with_rule(rule)
        .explain(document)
        .len();
    let retained_rows = input_rows - dropped_rows;

    let mut expected: Option<String> = None;
    let mut consistent = true;
    let mut results = Vec::with_capacity(strategies.len());

    for &strategy in strategies {
        let filter = NullRowFilter::new(strategy, rule);

        for _ in 0..options.warmup {
            black_box(filter.filter(black_box(document)));
        }

        let mut total = Duration::ZERO;
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;
        let mut output = String::new();

        for _ in 0..options.iterations {
            let start = Instant::now();
            let filtered = black_box(filter.filter(black_box(document)));
            let elapsed = start.elapsed();

            total += elapsed;
            min = min.min(elapsed);
            max = max.max(elapsed);
            output = filtered;
        }

        match &expected {
            None => expected = Some(output.clone()),
            Some(reference) if *reference != output => {
                tracing::warn!(
                    %strategy,
                    %baseline,
                    "Strategy output differs from baseline"
                );
                consistent = false;
            }
            Some(_) => {}
        }

        let mean = total / options.iterations;
        tracing::debug!(%strategy, ?mean, ?min, ?max, "Strategy measured");

        results.push(StrategyTiming {
            rank: 0,
            strategy,
            mean,
            min,
            max,
            total,
            output_bytes: output.len(),
            output_rows: retained_rows,
        });
    }

    results.sort_by_key(|timing| timing.mean);
    for (position, timing) in results.iter_mut().enumerate() {
        timing.rank = position + 1;
    }

    Ok(BenchReport {
        rule,
        input_bytes: document.len(),
        input_rows,
        options,
        consistent,
        results,
    })
}
