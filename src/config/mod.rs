//! Configuration management for placementd
//!
//! This module handles loading, validation, and management of the service configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PlacementError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub placement: PlacementConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PlacementError::Config(format!("Failed to read config file: {}", e)))?;

        let placement: PlacementConfig = serde_yaml::from_str(&content)
            .map_err(|e| PlacementError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { placement };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let placement = PlacementConfig::from_env()?;
        let config = Self { placement };

        config.validate()?;
        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.placement.storage
    }

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.placement.storage.database
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.placement.logging
    }

    /// Get auto-graduation scheduler configuration
    pub fn graduation(&self) -> &GraduationConfig {
        &self.placement.graduation
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.placement
            .storage
            .validate()
            .map_err(|e| PlacementError::Config(format!("Storage config error: {}", e)))?;

        self.placement
            .logging
            .validate()
            .map_err(|e| PlacementError::Config(format!("Logging config error: {}", e)))?;

        self.placement
            .graduation
            .validate()
            .map_err(|e| PlacementError::Config(format!("Graduation config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.placement = self.placement.merge(other.placement);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.placement)
            .map_err(|e| PlacementError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.placement)
            .map_err(|e| PlacementError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
