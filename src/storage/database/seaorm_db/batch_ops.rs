use crate::core::batch::{BatchRecord, CourseType, ValidatedBatch};
use crate::utils::error::{PlacementError, Result};
use sea_orm::*;
use tracing::{debug, warn};
use uuid::Uuid;

use super::super::entities;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a validated batch
    pub async fn insert_batch(&self, batch: &ValidatedBatch) -> Result<BatchRecord> {
        let candidate = batch.candidate();
        debug!(
            "Creating batch {} for department {}",
            candidate.batch_code, candidate.department_id
        );

        let active_model = entities::batch::Model::from_validated_batch(batch);
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| duplicate_code_or_database(e, &candidate.batch_code))?;

        model.to_domain_batch()
    }

    /// Find batch by ID
    pub async fn find_batch_by_id(&self, batch_id: Uuid) -> Result<Option<BatchRecord>> {
        debug!("Finding batch by ID: {}", batch_id);

        let model = entities::Batch::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        model.map(|m| m.to_domain_batch()).transpose()
    }

    /// Find batch by code within a department
    pub async fn find_batch_by_code(
        &self,
        batch_code: &str,
        department_id: Uuid,
    ) -> Result<Option<BatchRecord>> {
        debug!(
            "Finding batch by code: {} (department {})",
            batch_code, department_id
        );

        let model = entities::Batch::find()
            .filter(entities::batch::Column::BatchCode.eq(batch_code))
            .filter(entities::batch::Column::DepartmentId.eq(department_id))
            .one(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        model.map(|m| m.to_domain_batch()).transpose()
    }

    /// Active, non-graduated batches of a department, newest start year first
    pub async fn list_active_batches(&self, department_id: Uuid) -> Result<Vec<BatchRecord>> {
        let models = entities::Batch::find()
            .filter(entities::batch::Column::DepartmentId.eq(department_id))
            .filter(entities::batch::Column::IsActive.eq(true))
            .filter(entities::batch::Column::IsGraduated.eq(false))
            .order_by_desc(entities::batch::Column::StartYear)
            .all(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        to_domain_batches(models)
    }

    /// Graduated batches of a department, latest end year first
    pub async fn list_alumni_batches(&self, department_id: Uuid) -> Result<Vec<BatchRecord>> {
        let models = entities::Batch::find()
            .filter(entities::batch::Column::DepartmentId.eq(department_id))
            .filter(entities::batch::Column::IsGraduated.eq(true))
            .order_by_desc(entities::batch::Column::EndYear)
            .all(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        to_domain_batches(models)
    }

    /// Every batch of a department, optionally of one course type
    pub async fn list_department_batches(
        &self,
        department_id: Uuid,
        course_type: Option<CourseType>,
    ) -> Result<Vec<BatchRecord>> {
        let mut query = entities::Batch::find()
            .filter(entities::batch::Column::DepartmentId.eq(department_id));

        if let Some(course_type) = course_type {
            query = query.filter(entities::batch::Column::CourseType.eq(course_type.as_str()));
        }

        let models = query
            .order_by_desc(entities::batch::Column::StartYear)
            .order_by_asc(entities::batch::Column::CourseType)
            .all(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        to_domain_batches(models)
    }

    /// Active, non-graduated batches across all departments
    pub async fn list_graduation_candidates(&self) -> Result<Vec<BatchRecord>> {
        let models = entities::Batch::find()
            .filter(entities::batch::Column::IsActive.eq(true))
            .filter(entities::batch::Column::IsGraduated.eq(false))
            .order_by_asc(entities::batch::Column::EndYear)
            .all(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        to_domain_batches(models)
    }

    /// Update the active and graduated flags
    pub async fn update_batch_status(
        &self,
        batch_id: Uuid,
        is_active: bool,
        is_graduated: bool,
        updated_by: Option<Uuid>,
    ) -> Result<BatchRecord> {
        debug!(
            "Updating batch status: {} -> active={}, graduated={}",
            batch_id, is_active, is_graduated
        );

        let mut active_model: entities::batch::ActiveModel =
            self.find_batch_model(batch_id).await?.into();
        active_model.is_active = Set(is_active);
        active_model.is_graduated = Set(is_graduated);
        if updated_by.is_some() {
            active_model.updated_by = Set(updated_by);
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        model.to_domain_batch()
    }

    /// Replace the year span of a batch with a revalidated one
    pub async fn update_batch_span(
        &self,
        batch_id: Uuid,
        batch: &ValidatedBatch,
        updated_by: Option<Uuid>,
    ) -> Result<BatchRecord> {
        let candidate = batch.candidate();
        debug!(
            "Updating batch span: {} -> {} ({}-{})",
            batch_id, candidate.batch_code, candidate.start_year, candidate.end_year
        );

        let mut active_model: entities::batch::ActiveModel =
            self.find_batch_model(batch_id).await?.into();
        active_model.batch_code = Set(candidate.batch_code.clone());
        active_model.start_year = Set(candidate.start_year);
        active_model.end_year = Set(candidate.end_year);
        active_model.course_duration = Set(candidate.course_duration);
        active_model.academic_year_start = Set(batch.academic_year_start());
        active_model.academic_year_end = Set(batch.academic_year_end());
        if updated_by.is_some() {
            active_model.updated_by = Set(updated_by);
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(|e| duplicate_code_or_database(e, &candidate.batch_code))?;

        model.to_domain_batch()
    }

    /// Write recomputed student counts
    pub async fn update_batch_counts(
        &self,
        batch_id: Uuid,
        total_students: i32,
        placed_students: i32,
    ) -> Result<BatchRecord> {
        debug!(
            "Updating batch counts: {} -> {}/{}",
            batch_id, placed_students, total_students
        );

        let mut active_model: entities::batch::ActiveModel =
            self.find_batch_model(batch_id).await?.into();
        active_model.total_students = Set(total_students);
        active_model.placed_students = Set(placed_students);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let model = active_model
            .update(&self.db)
            .await
            .map_err(PlacementError::Database)?;

        model.to_domain_batch()
    }

    async fn find_batch_model(&self, batch_id: Uuid) -> Result<entities::batch::Model> {
        entities::Batch::find_by_id(batch_id)
            .one(&self.db)
            .await
            .map_err(PlacementError::Database)?
            .ok_or_else(|| PlacementError::not_found(format!("Batch {} not found", batch_id)))
    }
}

fn to_domain_batches(models: Vec<entities::batch::Model>) -> Result<Vec<BatchRecord>> {
    models.iter().map(|m| m.to_domain_batch()).collect()
}

/// Map a unique index violation on `(batch_code, department_id)` to a conflict
fn duplicate_code_or_database(err: DbErr, batch_code: &str) -> PlacementError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!("Duplicate batch code {}: {}", batch_code, detail);
            PlacementError::conflict(format!(
                "Batch {} already exists for this department",
                batch_code
            ))
        }
        _ => PlacementError::Database(err),
    }
}
