//! Configuration management for sieve.
//!
//! Settings live in an optional `sieve.yaml` in the working directory (or
//! a path given with `--config`). Every key is optional; command-line
//! flags override whatever the file says.
//!
//! ```yaml
//! data-file: ./CsvFile/mockdata.csv
//! strategy: single-pass
//! rule: header-aware
//! bench:
//!   warmup: 5
//!   iterations: 200
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sieve_csv::{NullRowFilter, RetentionRule, Strategy};
use tokio::fs;

use crate::bench::BenchOptions;
use crate::error::{Error, Result};
use crate::provider::DEFAULT_DATA_FILE;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sieve.yaml";

/// Configuration file structure for sieve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SieveConfig {
    /// CSV file read when no input is given on the command line.
    pub data_file: PathBuf,

    /// Default filtering strategy.
    pub strategy: Strategy,

    /// Default retention rule.
    pub rule: RetentionRule,

    /// Benchmark settings.
    pub bench: BenchOptions,
}

impl SieveConfig {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// holds invalid settings.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `sieve.yaml` from `dir`, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub async fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if fs::try_exists(&path).await? {
            Self::load(&path).await
        } else {
            tracing::debug!(dir = %dir.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check settings that the YAML schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the bench options are invalid.
    pub fn validate(&self) -> Result<()> {
        self.bench.validate()
    }

    /// The filter described by the configured strategy and rule.
    #[must_use]
    pub fn filter(&self) -> NullRowFilter {
        NullRowFilter::new(self.strategy, self.rule)
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            strategy: Strategy::default(),
            rule: RetentionRule::default(),
            bench: BenchOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn discover_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = SieveConfig::discover(temp_dir.path()).await.unwrap();
        assert_eq!(config, SieveConfig::default());
        assert_eq!(config.filter(), NullRowFilter::default());
    }

    #[tokio::test]
    async fn load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "data-file: data/input.csv\n\
             strategy: single-pass\n\
             rule: header-aware\n\
             bench:\n  warmup: 0\n  iterations: 10\n",
        )
        .await;

        let config = SieveConfig::load(&path).await.unwrap();
        assert_eq!(config.data_file, PathBuf::from("data/input.csv"));
        assert_eq!(config.strategy, Strategy::SinglePass);
        assert_eq!(config.rule, RetentionRule::HeaderAware);
        assert_eq!(
            config.bench,
            BenchOptions {
                warmup: 0,
                iterations: 10
            }
        );
    }

    #[tokio::test]
    async fn partial_config_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        write_config(&temp_dir, "strategy: indexed\nbench:\n  iterations: 7\n").await;

        let config = SieveConfig::discover(temp_dir.path()).await.unwrap();
        assert_eq!(config.strategy, Strategy::Indexed);
        assert_eq!(config.rule, RetentionRule::Strict);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.bench.iterations, 7);
        assert_eq!(config.bench.warmup, BenchOptions::default().warmup);
    }

    #[tokio::test]
    async fn unknown_strategy_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "strategy: regex\n").await;

        let err = SieveConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("sieve.yaml"));
    }

    #[tokio::test]
    async fn unknown_key_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "delimiter: ';'\n").await;

        let err = SieveConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn unknown_bench_key_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "bench:\n  iteratons: 5\n").await;

        let err = SieveConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("iteratons"));
    }

    #[tokio::test]
    async fn zero_iterations_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "bench:\n  iterations: 0\n").await;

        let err = SieveConfig::load(&path).await.unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[tokio::test]
    async fn missing_explicit_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = SieveConfig::load(&temp_dir.path().join("nope.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
