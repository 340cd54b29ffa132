//! Configuration management for Browser-Batch

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Library configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Settle pause after a scroll, in milliseconds
    pub settle_pause_ms: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_pause_ms: 200,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(pause) = env::var("BATCH_SETTLE_PAUSE_MS") {
            config.settle_pause_ms = pause
                .parse()
                .map_err(|_| Error::configuration("Invalid BATCH_SETTLE_PAUSE_MS"))?;
        }

        if let Ok(log_level) = env::var("BATCH_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Settle pause as a [`Duration`]
    pub fn settle_pause(&self) -> Duration {
        Duration::from_millis(self.settle_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.settle_pause_ms, 200);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.settle_pause(), Duration::from_millis(200));
    }

    #[test]
    fn test_parse_toml_config() {
        let config: Config = toml::from_str(
            r#"
            settle_pause_ms = 350
            log_level = "debug"
            "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.settle_pause_ms, 350);
        assert_eq!(config.log_level, "debug");
    }
}
