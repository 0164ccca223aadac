//! Error types for the placement service

use thiserror::Error;

/// Result type alias for the placement service
pub type Result<T> = std::result::Result<T, PlacementError>;

/// A rejected batch candidate.
///
/// Carries the first field that failed validation and the constraint it
/// violated, so callers can point the user at the exact input to correct.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// Name of the offending field (e.g. `batch_code`)
    pub field: &'static str,
    /// Human-readable description of the violated constraint
    pub constraint: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(field: &'static str, constraint: S) -> Self {
        Self {
            field,
            constraint: constraint.into(),
        }
    }
}

/// Main error type for the placement service
#[derive(Error, Debug)]
pub enum PlacementError {
    /// Client-correctable validation failures
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Uniqueness violations on direct creates
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing records on id-addressed operations
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Failures reported by a non-SeaORM student store
    #[error("Student store error: {0}")]
    StudentStore(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
