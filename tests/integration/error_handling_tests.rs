//! Error handling integration tests
//!
//! Tests that errors from validation and storage reach callers with the
//! right variant and code.

#[cfg(test)]
mod tests {
    use placement_rs::core::batch::{CourseType, validate_and_derive};
    use placement_rs::utils::error::{PlacementError, ValidationError};

    use crate::common::BatchFactory;

    // ==================== ValidationError to PlacementError Conversion ====================

    #[test]
    fn test_validation_error_flow() {
        let validation = validate_and_derive(&BatchFactory::with_span(2024, 2024, 1)).unwrap_err();
        let err: PlacementError = validation.into();

        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("end_year"));
    }

    #[test]
    fn test_unknown_course_type_is_validation_error() {
        let err: ValidationError = "PhD".parse::<CourseType>().unwrap_err();
        assert_eq!(err.field, "course_type");

        let err = PlacementError::from(err);
        assert!(err.as_validation().is_some());
    }

    #[test]
    fn test_database_error_is_not_client_error() {
        let err = PlacementError::from(sea_orm::DbErr::Custom("disk full".to_string()));
        assert!(!err.is_client_error());
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_not_found_and_conflict_codes() {
        assert_eq!(PlacementError::not_found("Batch x").error_code(), "NOT_FOUND");
        assert_eq!(PlacementError::conflict("Batch x").error_code(), "CONFLICT");
        assert!(PlacementError::conflict("Batch x").is_client_error());
    }
}
