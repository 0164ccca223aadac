use crate::core::student::{NewStudent, PlacementStatus, StudentRecord, StudentStore};
use crate::utils::error::{PlacementError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Enrol a student
    pub async fn insert_student(&self, student: &NewStudent) -> Result<StudentRecord> {
        debug!(
            "Creating student {} in batch {}",
            student.full_name, student.batch_id
        );

        let model = entities::student::Model::from_new_student(student)
            .insert(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        model.to_domain_student()
    }

    /// Change a student's placement status
    pub async fn update_student_placement_status(
        &self,
        student_id: Uuid,
        placement_status: PlacementStatus,
    ) -> Result<StudentRecord> {
        debug!(
            "Updating placement status: {} -> {}",
            student_id, placement_status
        );

        let model = entities::Student::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(PlacementError::Database)?
            .ok_or_else(|| {
                PlacementError::not_found(format!("Student {} not found", student_id))
            })?;

        let mut active_model: entities::student::ActiveModel = model.into();
        active_model.placement_status = Set(placement_status.to_string());
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        model.to_domain_student()
    }

    /// Students of a batch
    pub async fn list_batch_students(&self, batch_id: Uuid) -> Result<Vec<StudentRecord>> {
        let models = entities::Student::find()
            .filter(entities::student::Column::BatchId.eq(batch_id))
            .order_by_asc(entities::student::Column::FullName)
            .all(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        models.iter().map(|m| m.to_domain_student()).collect()
    }
}

#[async_trait]
impl StudentStore for SeaOrmDatabase {
    async fn count_by_batch(&self, batch_id: Uuid) -> Result<u64> {
        entities::Student::find()
            .filter(entities::student::Column::BatchId.eq(batch_id))
            .count(&self.db)
            .await
            .map_err(PlacementError::Database)
    }

    async fn count_placed_by_batch(&self, batch_id: Uuid) -> Result<u64> {
        let placed = PlacementStatus::PLACED.iter().map(|status| status.as_str());

        entities::Student::find()
            .filter(entities::student::Column::BatchId.eq(batch_id))
            .filter(entities::student::Column::PlacementStatus.is_in(placed))
            .count(&self.db)
            .await
            .map_err(PlacementError::Database)
    }
}
