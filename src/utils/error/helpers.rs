//! Helper functions for creating and classifying errors

use super::types::{PlacementError, ValidationError};

impl PlacementError {
    pub fn validation<S: Into<String>>(field: &'static str, constraint: S) -> Self {
        Self::Validation(ValidationError::new(field, constraint))
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn student_store<S: Into<String>>(message: S) -> Self {
        Self::StudentStore(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Stable, machine-readable code for the excluded HTTP layer.
    ///
    /// Codes never change; messages may be reworded.
    pub fn error_code(&self) -> &'static str {
        match self {
            PlacementError::Validation(_) => "VALIDATION_ERROR",
            PlacementError::Conflict(_) => "CONFLICT",
            PlacementError::NotFound(_) => "NOT_FOUND",
            PlacementError::Database(_) => "DATABASE_ERROR",
            PlacementError::StudentStore(_) => "STUDENT_STORE_ERROR",
            PlacementError::Config(_) => "CONFIG_ERROR",
            PlacementError::Serialization(_) | PlacementError::Yaml(_) => "SERIALIZATION_ERROR",
            PlacementError::Io(_) => "IO_ERROR",
            PlacementError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can fix the request and resubmit
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlacementError::Validation(_)
                | PlacementError::Conflict(_)
                | PlacementError::NotFound(_)
        )
    }

    /// The validation details, if this is a validation failure
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            PlacementError::Validation(err) => Some(err),
            _ => None,
        }
    }
}
