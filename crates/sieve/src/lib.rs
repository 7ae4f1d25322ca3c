//! Sieve - remove NULL rows from CSV text.
//!
//! This crate wraps the `sieve-csv` filter with everything needed to run
//! it from the command line: loading documents from disk, configuration,
//! an in-process strategy benchmark and the CLI itself.

#![forbid(unsafe_code)]

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod provider;

pub use error::{Error, Result};
