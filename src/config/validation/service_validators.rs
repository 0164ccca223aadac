//! Logging and scheduler validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::utils::logging::LogLevel;

/// Shortest sweep interval accepted when the scheduler is enabled
const MIN_GRADUATION_INTERVAL_SECS: u64 = 60;

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        self.level
            .parse::<LogLevel>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

impl Validate for GraduationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.interval_secs < MIN_GRADUATION_INTERVAL_SECS {
            return Err(format!(
                "Graduation interval must be at least {} seconds, got {}",
                MIN_GRADUATION_INTERVAL_SECS, self.interval_secs
            ));
        }

        Ok(())
    }
}
