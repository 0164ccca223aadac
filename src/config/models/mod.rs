//! Configuration data models
//!
//! This module defines all configuration structures used by the placement service.

pub mod graduation;
pub mod logging;
pub mod placement;
pub mod storage;

// Re-export all configuration types
pub use graduation::*;
pub use logging::*;
pub use placement::*;
pub use storage::*;

pub fn default_true() -> bool {
    true
}

pub fn default_database_url() -> String {
    "sqlite://data/placement.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default sweep interval in seconds (6 hours)
pub fn default_graduation_interval() -> u64 {
    6 * 60 * 60
}
