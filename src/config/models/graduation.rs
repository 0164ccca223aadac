//! Auto-graduation scheduler configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the periodic auto-graduation sweep run by `placementd run`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraduationConfig {
    /// Run the sweep on a timer
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between sweeps
    #[serde(default = "default_graduation_interval")]
    pub interval_secs: u64,
    /// Sweep once immediately at startup instead of waiting a full interval
    #[serde(default = "default_true")]
    pub run_on_startup: bool,
}

impl Default for GraduationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_graduation_interval(),
            run_on_startup: true,
        }
    }
}

impl GraduationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Merge scheduler configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = false;
        }
        if other.interval_secs != default_graduation_interval() {
            self.interval_secs = other.interval_secs;
        }
        if !other.run_on_startup {
            self.run_on_startup = false;
        }
        self
    }
}
