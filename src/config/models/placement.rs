//! Top-level service configuration

use super::*;
use crate::utils::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};

/// Everything `placementd` needs to run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlacementConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Auto-graduation scheduler configuration
    #[serde(default)]
    pub graduation: GraduationConfig,
}

impl PlacementConfig {
    /// Build a configuration from `PLACEMENT_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PLACEMENT_DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Ok(value) = std::env::var("PLACEMENT_DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections = parse_env(
                "PLACEMENT_DATABASE_MAX_CONNECTIONS",
                &value,
            )?;
        }
        if let Ok(level) = std::env::var("PLACEMENT_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = std::env::var("PLACEMENT_LOG_FORMAT") {
            config.logging.format = format.parse().map_err(PlacementError::Config)?;
        }
        if let Ok(value) = std::env::var("PLACEMENT_GRADUATION_INTERVAL_SECS") {
            config.graduation.interval_secs =
                parse_env("PLACEMENT_GRADUATION_INTERVAL_SECS", &value)?;
        }

        Ok(config)
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.storage = self.storage.merge(other.storage);
        self.logging = self.logging.merge(other.logging);
        self.graduation = self.graduation.merge(other.graduation);
        self
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PlacementError::config(format!("Invalid value for {}: {}", name, value)))
}
