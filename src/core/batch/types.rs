//! Batch domain types

use super::lifecycle;
use super::statistics::BatchStatistics;
use crate::utils::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of course a batch is enrolled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Undergraduate
    #[serde(rename = "UG")]
    Ug,
    /// Postgraduate
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "Certificate")]
    Certificate,
}

impl CourseType {
    pub const ALL: [CourseType; 4] = [
        CourseType::Ug,
        CourseType::Pg,
        CourseType::Diploma,
        CourseType::Certificate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Ug => "UG",
            CourseType::Pg => "PG",
            CourseType::Diploma => "Diploma",
            CourseType::Certificate => "Certificate",
        }
    }

    /// Usual length of the course in years
    pub fn default_duration(&self) -> i32 {
        match self {
            CourseType::Ug => 4,
            CourseType::Pg => 2,
            CourseType::Diploma => 3,
            CourseType::Certificate => 1,
        }
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CourseType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseType::ALL
            .into_iter()
            .find(|course_type| course_type.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "course_type",
                    format!("must be one of UG, PG, Diploma, Certificate (got {:?})", s),
                )
            })
    }
}

/// Candidate batch submitted for creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBatch {
    /// `YYYY-YYYY`
    pub batch_code: String,
    pub start_year: i32,
    pub end_year: i32,
    pub course_type: CourseType,
    pub course_duration: i32,
    /// Weak reference to the owning department
    pub department_id: Uuid,
    /// Weak reference to the creating user
    #[serde(default)]
    pub created_by: Option<Uuid>,
}

impl NewBatch {
    /// Candidate for a course starting in `start_year` with the course's
    /// default duration and the matching generated batch code.
    pub fn for_course(department_id: Uuid, start_year: i32, course_type: CourseType) -> Self {
        let course_duration = course_type.default_duration();
        Self {
            batch_code: super::generate_batch_code(start_year, course_type.as_str()),
            start_year,
            end_year: start_year + course_duration,
            course_type,
            course_duration,
            department_id,
            created_by: None,
        }
    }

    pub fn with_created_by(mut self, user_id: Uuid) -> Self {
        self.created_by = Some(user_id);
        self
    }
}

/// A candidate that passed validation, together with its derived
/// academic-year dates. Only [`lifecycle::validate_and_derive`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBatch {
    pub(super) candidate: NewBatch,
    pub(super) academic_year_start: NaiveDate,
    pub(super) academic_year_end: NaiveDate,
}

impl ValidatedBatch {
    pub fn candidate(&self) -> &NewBatch {
        &self.candidate
    }

    pub fn academic_year_start(&self) -> NaiveDate {
        self.academic_year_start
    }

    pub fn academic_year_end(&self) -> NaiveDate {
        self.academic_year_end
    }
}

/// Change of a batch's year span, re-validated as a whole
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchYearsUpdate {
    /// New batch code; `{start_year}-{end_year}` when `None`
    #[serde(default)]
    pub batch_code: Option<String>,
    pub start_year: i32,
    pub end_year: i32,
    pub course_duration: i32,
    #[serde(default)]
    pub updated_by: Option<Uuid>,
}

/// Where a batch currently stands in its course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicStatus {
    /// Studying, in the given (1-based) year of the course
    Year(i32),
    Alumni,
}

impl std::fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcademicStatus::Year(year) => f.write_str(&lifecycle::ordinal_year_label(*year)),
            AcademicStatus::Alumni => f.write_str("Alumni"),
        }
    }
}

/// Persisted batch (one cohort of a department)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub id: Uuid,
    pub batch_code: String,
    pub start_year: i32,
    pub end_year: i32,
    pub course_type: CourseType,
    pub course_duration: i32,
    pub department_id: Uuid,
    pub is_active: bool,
    pub is_graduated: bool,
    /// April 1 of `start_year`
    pub academic_year_start: NaiveDate,
    /// March 31 of `end_year`
    pub academic_year_end: NaiveDate,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    /// Cached; refreshed by the statistics recompute only
    pub total_students: i32,
    /// Cached; refreshed by the statistics recompute only
    pub placed_students: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BatchRecord {
    /// Year of study (1..=course_duration) on `today`
    pub fn current_academic_year(&self, today: NaiveDate) -> i32 {
        lifecycle::current_academic_year(self.start_year, self.course_duration, today)
    }

    pub fn academic_status(&self, today: NaiveDate) -> AcademicStatus {
        lifecycle::academic_status(
            self.is_graduated,
            self.start_year,
            self.course_duration,
            today,
        )
    }

    /// e.g. `2024-2028 UG`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.batch_code, self.course_type)
    }

    /// e.g. `2024-2028 UG (2nd Year)`
    pub fn full_display_name(&self, today: NaiveDate) -> String {
        format!("{} ({})", self.display_name(), self.academic_status(today))
    }

    pub fn placement_rate(&self) -> u32 {
        lifecycle::placement_rate(self.placed_students, self.total_students)
    }

    pub fn should_graduate(&self, today: NaiveDate) -> bool {
        lifecycle::should_graduate(self.end_year, today)
    }

    /// Cached counts as last recomputed
    pub fn statistics(&self) -> BatchStatistics {
        BatchStatistics::new(self.total_students, self.placed_students)
    }
}
