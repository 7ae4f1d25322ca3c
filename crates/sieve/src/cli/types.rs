//! CLI value enums and domain type conversions.
//!
//! This module contains the value enums used for CLI argument parsing
//! and their conversions to the `sieve-csv` domain types.

use clap::ValueEnum;
use sieve_csv::{RetentionRule, Strategy};

/// Filtering strategy for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Split rows and cells, then rejoin
    #[value(name = "split-filter", alias = "split")]
    SplitFilter,
    /// Single character scan
    #[value(name = "single-pass", alias = "scan")]
    SinglePass,
    /// Materialized indexed rows
    Indexed,
}

impl std::fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Strategy::from(*self))
    }
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::SplitFilter => Self::SplitFilter,
            StrategyArg::SinglePass => Self::SinglePass,
            StrategyArg::Indexed => Self::Indexed,
        }
    }
}

/// Retention rule for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleArg {
    /// Drop rows with a NULL cell
    Strict,
    /// Also drop blank rows, always keep the header
    #[value(name = "header-aware")]
    HeaderAware,
}

impl std::fmt::Display for RuleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RetentionRule::from(*self))
    }
}

impl From<RuleArg> for RetentionRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Strict => Self::Strict,
            RuleArg::HeaderAware => Self::HeaderAware,
        }
    }
}
