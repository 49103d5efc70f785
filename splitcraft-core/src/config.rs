//! Configuration for split operations

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables of the output writer and width estimator.
///
/// All fields default to the engine's built-in behavior, so an empty or
/// absent configuration file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Rows sampled per column when estimating widths, header included.
    pub width_sample_rows: usize,
    /// Character budget added on top of the longest sampled value.
    pub width_padding: f64,
    /// Multiplier applied to the padded length.
    pub width_factor: f64,
    /// Suffix appended to the source base name for the output directory.
    pub output_suffix: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            width_sample_rows: 100,
            width_padding: 2.0,
            width_factor: 1.5,
            output_suffix: "split".to_string(),
        }
    }
}

impl SplitterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SplitterConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitterConfig::default();
        assert_eq!(config.width_sample_rows, 100);
        assert_eq!(config.width_padding, 2.0);
        assert_eq!(config.width_factor, 1.5);
        assert_eq!(config.output_suffix, "split");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SplitterConfig = toml::from_str("width_sample_rows = 10").unwrap();
        assert_eq!(config.width_sample_rows, 10);
        assert_eq!(config.width_factor, 1.5);
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: SplitterConfig = toml::from_str("").unwrap();
        assert_eq!(config.output_suffix, "split");
    }
}
