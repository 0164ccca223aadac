use crate::core::student::{NewStudent, PlacementStatus, StudentRecord};
use crate::utils::error::PlacementError;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student database model (the columns batch statistics rely on)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Student ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Batch the student belongs to
    pub batch_id: Uuid,

    /// Department the student belongs to
    pub department_id: Uuid,

    /// Full name
    pub full_name: String,

    /// Placement status (`Not Placed`, `Placed`, `Multiple Offers`)
    pub placement_status: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Student entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain student record
    pub fn to_domain_student(&self) -> Result<StudentRecord, PlacementError> {
        let placement_status: PlacementStatus = self
            .placement_status
            .parse()
            .map_err(PlacementError::Internal)?;

        Ok(StudentRecord {
            id: self.id,
            batch_id: self.batch_id,
            department_id: self.department_id,
            full_name: self.full_name.clone(),
            placement_status,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    /// Active model for a new student
    pub fn from_new_student(student: &NewStudent) -> ActiveModel {
        let now = chrono::Utc::now();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            batch_id: Set(student.batch_id),
            department_id: Set(student.department_id),
            full_name: Set(student.full_name.clone()),
            placement_status: Set(student.placement_status.to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
