//! Error types for sieve-csv operations.
//!
//! Filtering itself never fails; these errors only come from parsing
//! strategy and rule names supplied by callers.

use thiserror::Error;

/// The error type for sieve-csv operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A strategy name did not match any known strategy.
    #[error("unknown strategy '{0}' (expected split-filter, single-pass or indexed)")]
    UnknownStrategy(String),

    /// A rule name did not match any known retention rule.
    #[error("unknown rule '{0}' (expected strict or header-aware)")]
    UnknownRule(String),
}

/// A specialized Result type for sieve-csv operations.
pub type Result<T> = std::result::Result<T, Error>;
