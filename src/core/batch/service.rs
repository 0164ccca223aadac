//! Batch query and factory operations
//!
//! [`BatchService`] is the entry point the controller layer and the
//! `placementd` scheduler call into. It validates through the lifecycle rules,
//! persists through the SeaORM database and delegates statistics to the
//! aggregator.

use super::lifecycle;
use super::statistics::{BatchStatistics, BatchStatisticsAggregator};
use super::types::{BatchRecord, BatchYearsUpdate, CourseType, NewBatch};
use crate::core::student::StudentStore;
use crate::storage::database::Database;
use crate::utils::error::{PlacementError, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Batch operations over a database and a student store
#[derive(Debug, Clone)]
pub struct BatchService {
    db: Arc<Database>,
    statistics: BatchStatisticsAggregator,
}

impl BatchService {
    pub fn new(db: Arc<Database>, students: Arc<dyn StudentStore>) -> Self {
        let statistics = BatchStatisticsAggregator::new(db.clone(), students);
        Self { db, statistics }
    }

    /// Service whose student counts come from the same database
    pub fn with_database_students(db: Arc<Database>) -> Self {
        let students: Arc<dyn StudentStore> = db.clone();
        Self::new(db, students)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Return the batch with the candidate's `(batch_code, department_id)`,
    /// creating it if there is none. An existing batch is returned as is.
    pub async fn find_or_create_batch(&self, candidate: &NewBatch) -> Result<BatchRecord> {
        if let Some(existing) = self
            .db
            .find_batch_by_code(&candidate.batch_code, candidate.department_id)
            .await?
        {
            debug!(
                "Found existing batch {} for department {}",
                existing.display_name(),
                candidate.department_id
            );
            return Ok(existing);
        }

        match self.create_batch(candidate).await {
            Err(PlacementError::Conflict(message)) => {
                // Lost a race with a concurrent creator; theirs is the batch.
                debug!("Concurrent batch creation: {}", message);
                self.db
                    .find_batch_by_code(&candidate.batch_code, candidate.department_id)
                    .await?
                    .ok_or(PlacementError::Conflict(message))
            }
            result => result,
        }
    }

    /// Validate and insert; a duplicate `(batch_code, department_id)` is a
    /// [`PlacementError::Conflict`].
    pub async fn create_batch(&self, candidate: &NewBatch) -> Result<BatchRecord> {
        let validated = lifecycle::validate_and_derive(candidate)?;
        let batch = self.db.insert_batch(&validated).await?;
        info!(
            "Created batch {} ({}) for department {}",
            batch.display_name(),
            batch.id,
            batch.department_id
        );
        Ok(batch)
    }

    pub async fn get_batch(&self, batch_id: Uuid) -> Result<BatchRecord> {
        self.db
            .find_batch_by_id(batch_id)
            .await?
            .ok_or_else(|| PlacementError::not_found(format!("Batch {} not found", batch_id)))
    }

    /// Active, non-graduated batches, newest cohort first
    pub async fn list_active_batches(&self, department_id: Uuid) -> Result<Vec<BatchRecord>> {
        self.db.list_active_batches(department_id).await
    }

    /// Graduated batches, most recently ended first
    pub async fn list_alumni_batches(&self, department_id: Uuid) -> Result<Vec<BatchRecord>> {
        self.db.list_alumni_batches(department_id).await
    }

    /// Every batch of a department, optionally of one course type
    pub async fn list_department_batches(
        &self,
        department_id: Uuid,
        course_type: Option<CourseType>,
    ) -> Result<Vec<BatchRecord>> {
        self.db
            .list_department_batches(department_id, course_type)
            .await
    }

    /// Change the year span of a batch.
    ///
    /// The updated batch is validated as a whole and its academic-year dates
    /// are derived again. Without an explicit code the batch is renamed to
    /// `{start_year}-{end_year}`.
    pub async fn update_batch_years(
        &self,
        batch_id: Uuid,
        update: &BatchYearsUpdate,
    ) -> Result<BatchRecord> {
        let current = self.get_batch(batch_id).await?;

        let candidate = NewBatch {
            batch_code: update
                .batch_code
                .clone()
                .unwrap_or_else(|| format!("{}-{}", update.start_year, update.end_year)),
            start_year: update.start_year,
            end_year: update.end_year,
            course_type: current.course_type,
            course_duration: update.course_duration,
            department_id: current.department_id,
            created_by: current.created_by,
        };
        let validated = lifecycle::validate_and_derive(&candidate)?;

        let batch = self
            .db
            .update_batch_span(batch_id, &validated, update.updated_by)
            .await?;
        info!(
            "Updated batch {} span to {}-{}",
            batch.id, batch.start_year, batch.end_year
        );
        Ok(batch)
    }

    /// Retire a batch by hand
    pub async fn mark_graduated(
        &self,
        batch_id: Uuid,
        updated_by: Option<Uuid>,
    ) -> Result<BatchRecord> {
        let batch = self
            .db
            .update_batch_status(batch_id, false, true, updated_by)
            .await?;
        info!("Batch {} marked as graduated", batch.display_name());
        Ok(batch)
    }

    /// Activate or deactivate a batch. Graduated batches stay inactive.
    pub async fn set_active(
        &self,
        batch_id: Uuid,
        active: bool,
        updated_by: Option<Uuid>,
    ) -> Result<BatchRecord> {
        let current = self.get_batch(batch_id).await?;
        if active && current.is_graduated {
            return Err(PlacementError::validation(
                "is_active",
                "a graduated batch cannot be reactivated",
            ));
        }

        self.db
            .update_batch_status(batch_id, active, current.is_graduated, updated_by)
            .await
    }

    pub async fn recompute_statistics(&self, batch_id: Uuid) -> Result<BatchStatistics> {
        self.statistics.recompute(batch_id).await
    }

    pub async fn recompute_department_statistics(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<(BatchRecord, BatchStatistics)>> {
        self.statistics.recompute_department(department_id).await
    }

    /// Graduate every active batch whose last academic year ended before
    /// `today`, returning the batches that changed.
    ///
    /// Batches are persisted one at a time; a failure stops the sweep and
    /// leaves the already-graduated batches in place. Running it again is
    /// safe.
    pub async fn auto_graduate_completed_batches(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<BatchRecord>> {
        let candidates = self.db.list_graduation_candidates().await?;
        debug!(
            "Auto-graduation sweep for {}: {} active batches",
            today,
            candidates.len()
        );

        let mut graduated = Vec::new();
        for batch in candidates {
            if !batch.should_graduate(today) {
                continue;
            }

            match self.db.update_batch_status(batch.id, false, true, None).await {
                Ok(updated) => {
                    info!(
                        "Auto-graduated batch {} ({}) of department {}",
                        updated.display_name(),
                        updated.id,
                        updated.department_id
                    );
                    graduated.push(updated);
                }
                Err(e) => {
                    warn!(
                        "Auto-graduation stopped at batch {} after {} graduated: {}",
                        batch.id,
                        graduated.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!("Auto-graduation sweep graduated {} batches", graduated.len());
        Ok(graduated)
    }
}
