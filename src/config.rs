//! # Application Configuration
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! file (or no file at all) gives a working system:
//!
//! ```toml
//! channel_buffer = 32
//! seed_stub_products = false
//!
//! [series]
//! min_len = 11
//! max_len = 12
//! new_subs_modifier = 50
//! cancellations_modifier = 25
//! anchor_year = 2023
//! ```
//!
//! [`AppConfig::from_env`] loads the file named by `ANALYTICS_CONFIG`, falling back
//! to the defaults when the variable is unset. Log verbosity is separate and
//! follows `RUST_LOG`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::series::SeriesPolicy;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "ANALYTICS_CONFIG";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid series policy: {0}")]
    InvalidSeriesPolicy(String),

    #[error("channel_buffer must be greater than zero")]
    ZeroChannelBuffer,
}

/// Top-level settings for an [`AnalyticsSystem`](crate::lifecycle::AnalyticsSystem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Capacity of the product actor's mailbox.
    pub channel_buffer: usize,
    /// Start with the stubbed starter products instead of an empty store.
    pub seed_stub_products: bool,
    pub series: SeriesPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            seed_stub_products: false,
            series: SeriesPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or returns the defaults if it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        self.series.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_series_table_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            seed_stub_products = true

            [series]
            min_len = 3
            "#,
        )
        .unwrap();

        assert!(config.seed_stub_products);
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.series.min_len, 3);
        assert_eq!(config.series.max_len, 12);
        assert_eq!(config.series.new_subs_modifier, 50);
    }

    #[test]
    fn test_rejects_zero_channel_buffer() {
        let result = AppConfig::from_toml_str("channel_buffer = 0");
        assert!(matches!(result, Err(ConfigError::ZeroChannelBuffer)));
    }

    #[test]
    fn test_rejects_inverted_series_bounds() {
        let result = AppConfig::from_toml_str("[series]\nmin_len = 10\nmax_len = 2\n");
        assert!(matches!(result, Err(ConfigError::InvalidSeriesPolicy(_))));
    }

    #[test]
    fn test_rejects_oversized_series_length() {
        let result = AppConfig::from_toml_str(
            "[series]\nmin_len = 9000000000000000000\nmax_len = 9000000000000000000\n",
        );
        assert!(matches!(result, Err(ConfigError::InvalidSeriesPolicy(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = AppConfig::from_toml_str("channel_buffer = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "channel_buffer = 8").unwrap();

        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = AppConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
