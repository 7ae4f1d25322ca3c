//! Drops CSV rows that carry a NULL sentinel cell.
//!
//! A document is plain text: rows are separated by `\n`, cells by `,`,
//! with no quoting. Any row with a cell exactly equal to `NULL` is
//! removed; under [`RetentionRule::HeaderAware`] all-blank rows are
//! removed too, while the first row is always kept. Retained rows are
//! copied byte for byte.
//!
//! ```
//! use sieve_csv::filter_null_rows;
//!
//! let output = filter_null_rows("header,header\nANNUL,ANNULLED\nnull,NILL\nNULL,NULL");
//! assert_eq!(output, "header,header\nANNUL,ANNULLED\nnull,NILL");
//! ```
//!
//! Several [`Strategy`] implementations are provided so they can be
//! benchmarked against each other; all of them produce identical output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod filter;
pub mod rule;
pub mod strategy;
pub mod verdict;

pub use document::IndexedRow;
pub use error::{Error, Result};
pub use filter::{filter_null_rows, NullRowFilter};
pub use rule::RetentionRule;
pub use strategy::Strategy;
pub use verdict::{DropReason, DroppedRow, Verdict};
