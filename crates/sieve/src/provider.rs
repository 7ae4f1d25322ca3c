//! Loading CSV documents from disk or standard input.
//!
//! The provider owns every existence check so the filter only ever sees a
//! string. A missing file is not an error: it yields an empty document,
//! which the filter maps to empty output.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::error::Result;

/// Data file read when no input is given and no config overrides it.
pub const DEFAULT_DATA_FILE: &str = "./CsvFile/mockdata.csv";

/// Reads a whole CSV file into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileProvider {
    path: PathBuf,
}

impl CsvFileProvider {
    /// Creates a provider for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this provider reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file's content, or an empty string if it does not exist.
    ///
    /// Line breaks are preserved exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid UTF-8.
    pub async fn retrieve(&self) -> Result<String> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                tracing::debug!(
                    path = %self.path.display(),
                    bytes = content.len(),
                    "Loaded CSV data"
                );
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "CSV data file not found, using empty document"
                );
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for CsvFileProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

/// Reads standard input to the end.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or is not valid UTF-8.
pub async fn read_stdin() -> Result<String> {
    let mut content = String::new();
    tokio::io::stdin().read_to_string(&mut content).await?;
    tracing::debug!(bytes = content.len(), "Loaded CSV data from stdin");
    Ok(content)
}
