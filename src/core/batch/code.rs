//! Batch code generation

use super::types::CourseType;

/// Duration used for course types that are not recognised
pub const FALLBACK_COURSE_DURATION: i32 = 4;

/// Default course length in years for a course-type name
pub fn default_duration(course_type: &str) -> i32 {
    course_type
        .parse::<CourseType>()
        .map(|course_type| course_type.default_duration())
        .unwrap_or(FALLBACK_COURSE_DURATION)
}

/// `"{start_year}-{start_year + default duration}"`
pub fn generate_batch_code(start_year: i32, course_type: &str) -> String {
    format!("{}-{}", start_year, start_year + default_duration(course_type))
}
