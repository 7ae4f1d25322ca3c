//! Output formatting for CLI commands.
//!
//! Text output goes through writer-generic functions so it can be tested
//! against an in-memory buffer; JSON output is pretty-printed to stdout.

use std::io::{self, Write};
use std::time::Duration;

use colored::Colorize;
use serde::Serialize;
use sieve_csv::{DroppedRow, RetentionRule, Strategy};

use crate::bench::BenchReport;
use crate::error::Result;

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print a value as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value)?;
    writeln!(handle, "{json}")?;
    Ok(())
}

/// Format a duration with a unit suited to its magnitude.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        format!("{nanos} ns")
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", duration.as_secs_f64() * 1e6)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", duration.as_secs_f64() * 1e3)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

/// Write a filtered document as text.
///
/// The document's bytes are written unchanged. A line terminator is added
/// only when the document is non-empty and does not already end in one,
/// so feeding the output back through the filter reproduces it.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_document<W: Write>(w: &mut W, document: &str) -> io::Result<()> {
    if document.is_empty() {
        return Ok(());
    }
    w.write_all(document.as_bytes())?;
    if !document.ends_with('\n') {
        writeln!(w)?;
    }
    Ok(())
}

/// Write the ranked benchmark table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_bench_report<W: Write>(w: &mut W, report: &BenchReport) -> io::Result<()> {
    writeln!(w, "{}", "Strategy Benchmark".cyan().bold())?;
    writeln!(
        w,
        "  {}: {} ({} rows, {} bytes)",
        "Rule".white().bold(),
        report.rule,
        report.input_rows,
        report.input_bytes
    )?;
    writeln!(
        w,
        "  {}: {} warmup, {} timed",
        "Passes".white().bold(),
        report.options.warmup,
        report.options.iterations
    )?;
    writeln!(w)?;
    writeln!(
        w,
        "  {:<4} {:<14} {:>12} {:>12} {:>12} {:>10}",
        "Rank", "Strategy", "Mean", "Min", "Max", "Rows out"
    )?;

    for timing in &report.results {
        let strategy = format!("{:<14}", timing.strategy.name());
        let strategy = if timing.rank == 1 {
            strategy.green().bold().to_string()
        } else {
            strategy
        };
        writeln!(
            w,
            "  {:<4} {} {:>12} {:>12} {:>12} {:>10}",
            timing.rank,
            strategy,
            format_duration(timing.mean),
            format_duration(timing.min),
            format_duration(timing.max),
            timing.output_rows
        )?;
    }

    writeln!(w)?;
    if report.consistent {
        writeln!(w, "  {}", "All strategies produced identical output".green())?;
    } else {
        writeln!(w, "  {}", "Strategies produced different output".red().bold())?;
    }
    Ok(())
}

/// Write one line per dropped row.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_explanation<W: Write>(w: &mut W, dropped: &[DroppedRow]) -> io::Result<()> {
    if dropped.is_empty() {
        return writeln!(w, "{}", "No rows dropped".green());
    }
    writeln!(
        w,
        "{}",
        format!("Dropped {} row(s):", dropped.len()).yellow().bold()
    )?;
    for row in dropped {
        writeln!(w, "  {row}")?;
    }
    Ok(())
}

/// Write the available strategies and rules.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_catalog<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", "Strategies".cyan().bold())?;
    for strategy in Strategy::ALL {
        let marker = if strategy == Strategy::default() { " (default)" } else { "" };
        writeln!(
            w,
            "  {:<14} {}{}",
            strategy.name().white().bold(),
            strategy.description(),
            marker
        )?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "Rules".cyan().bold())?;
    for rule in RetentionRule::ALL {
        let marker = if rule == RetentionRule::default() { " (default)" } else { "" };
        writeln!(
            w,
            "  {:<14} {}{}",
            rule.name().white().bold(),
            rule.description(),
            marker
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{self, BenchOptions};
    use rstest::rstest;
    use sieve_csv::DropReason;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[rstest]
    #[case(Duration::from_nanos(999), "999 ns")]
    #[case(Duration::from_nanos(1_500), "1.50 µs")]
    #[case(Duration::from_micros(2_250), "2.25 ms")]
    #[case(Duration::from_millis(3_000), "3.00 s")]
    fn formats_durations(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(duration), expected);
    }

    #[rstest]
    #[case::empty("", "")]
    #[case::unterminated("a\nb", "a\nb\n")]
    #[case::terminated("a\nb\n", "a\nb\n")]
    #[case::empty_rows("a\n\n", "a\n\n")]
    #[case::lone_newline("\n", "\n")]
    fn document_gets_at_most_one_terminator(#[case] document: &str, #[case] expected: &str) {
        assert_eq!(render(|w| write_document(w, document)), expected);
    }

    #[test]
    fn written_document_is_stable_under_refiltering() {
        let filter = sieve_csv::NullRowFilter::default();
        let once = render(|w| write_document(w, &filter.filter("a\nNULL\nb\n")));
        let twice = render(|w| write_document(w, &filter.filter(&once)));
        assert_eq!(once, "a\nb\n");
        assert_eq!(twice, once);
    }

    #[test]
    fn explanation_lists_rows() {
        let dropped = [
            DroppedRow {
                index: 1,
                reason: DropReason::NullCell { column: 2 },
            },
            DroppedRow {
                index: 4,
                reason: DropReason::Blank,
            },
        ];
        let text = render(|w| write_explanation(w, &dropped));
        assert!(text.contains("Dropped 2 row(s):"));
        assert!(text.contains("row 1: NULL in column 2"));
        assert!(text.contains("row 4: all cells blank"));
    }

    #[test]
    fn explanation_without_drops() {
        let text = render(|w| write_explanation(w, &[]));
        assert_eq!(text.trim(), "No rows dropped");
    }

    #[test]
    fn catalog_lists_every_strategy_and_rule() {
        let text = render(write_catalog);
        for strategy in Strategy::ALL {
            assert!(text.contains(strategy.name()));
        }
        for rule in RetentionRule::ALL {
            assert!(text.contains(rule.name()));
        }
        assert_eq!(text.matches("(default)").count(), 2);
    }

    #[test]
    fn bench_report_table_has_a_row_per_strategy() {
        let options = BenchOptions {
            warmup: 0,
            iterations: 1,
        };
        let report = bench::run("a\nNULL\nb", RetentionRule::Strict, &Strategy::ALL, options)
            .unwrap();
        let text = render(|w| write_bench_report(w, &report));

        assert!(text.contains("Rule: strict (3 rows, 8 bytes)"));
        assert!(text.contains("identical output"));
        for strategy in Strategy::ALL {
            assert!(text.contains(strategy.name()));
        }
    }
}
