use crate::core::batch::{BatchRecord, CourseType, ValidatedBatch};
use crate::utils::error::PlacementError;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Batch database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Batch ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Batch code (`YYYY-YYYY`), unique per department
    pub batch_code: String,

    /// First calendar year of the course
    pub start_year: i32,

    /// Last calendar year of the course
    pub end_year: i32,

    /// Course type (`UG`, `PG`, `Diploma`, `Certificate`)
    pub course_type: String,

    /// Course length in years
    pub course_duration: i32,

    /// Owning department (weak reference)
    pub department_id: Uuid,

    /// Active flag
    pub is_active: bool,

    /// Graduated flag
    pub is_graduated: bool,

    /// Derived: April 1 of start year
    pub academic_year_start: Date,

    /// Derived: March 31 of end year
    pub academic_year_end: Date,

    /// Creating user (weak reference)
    pub created_by: Option<Uuid>,

    /// Last updating user (weak reference)
    pub updated_by: Option<Uuid>,

    /// Cached student count
    pub total_students: i32,

    /// Cached placed student count
    pub placed_students: i32,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Batch entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain batch record
    pub fn to_domain_batch(&self) -> Result<BatchRecord, PlacementError> {
        let course_type: CourseType = self.course_type.parse().map_err(|_| {
            PlacementError::internal(format!(
                "Batch {} has unknown course type {:?}",
                self.id, self.course_type
            ))
        })?;

        Ok(BatchRecord {
            id: self.id,
            batch_code: self.batch_code.clone(),
            start_year: self.start_year,
            end_year: self.end_year,
            course_type,
            course_duration: self.course_duration,
            department_id: self.department_id,
            is_active: self.is_active,
            is_graduated: self.is_graduated,
            academic_year_start: self.academic_year_start,
            academic_year_end: self.academic_year_end,
            created_by: self.created_by,
            updated_by: self.updated_by,
            total_students: self.total_students,
            placed_students: self.placed_students,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    /// Active model for a freshly validated batch
    pub fn from_validated_batch(batch: &ValidatedBatch) -> ActiveModel {
        let candidate = batch.candidate();
        let now = chrono::Utc::now();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            batch_code: Set(candidate.batch_code.clone()),
            start_year: Set(candidate.start_year),
            end_year: Set(candidate.end_year),
            course_type: Set(candidate.course_type.to_string()),
            course_duration: Set(candidate.course_duration),
            department_id: Set(candidate.department_id),
            is_active: Set(true),
            is_graduated: Set(false),
            academic_year_start: Set(batch.academic_year_start()),
            academic_year_end: Set(batch.academic_year_end()),
            created_by: Set(candidate.created_by),
            updated_by: Set(candidate.created_by),
            total_students: Set(0),
            placed_students: Set(0),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
