//! Batch statistics aggregator
//!
//! Recomputes the cached `total_students` / `placed_students` counts of a
//! batch from the Student store. A recompute is a point-in-time snapshot:
//! student status changes racing with it are picked up by the next one.

use super::lifecycle;
use super::types::BatchRecord;
use crate::core::student::StudentStore;
use crate::storage::database::Database;
use crate::utils::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Student counts of one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total_students: i32,
    pub placed_students: i32,
    /// Rounded percentage, 0 when the batch has no students
    pub placement_rate: u32,
}

impl BatchStatistics {
    pub fn new(total_students: i32, placed_students: i32) -> Self {
        Self {
            total_students,
            placed_students,
            placement_rate: lifecycle::placement_rate(placed_students, total_students),
        }
    }
}

/// Resyncs cached batch counts against the Student store
#[derive(Clone)]
pub struct BatchStatisticsAggregator {
    db: Arc<Database>,
    students: Arc<dyn StudentStore>,
}

impl std::fmt::Debug for BatchStatisticsAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchStatisticsAggregator")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl BatchStatisticsAggregator {
    pub fn new(db: Arc<Database>, students: Arc<dyn StudentStore>) -> Self {
        Self { db, students }
    }

    /// Count the batch's students, write the counts back and return them
    pub async fn recompute(&self, batch_id: Uuid) -> Result<BatchStatistics> {
        debug!("Recomputing statistics for batch {}", batch_id);

        // Fail fast on an unknown id before touching the student store
        if self.db.find_batch_by_id(batch_id).await?.is_none() {
            return Err(PlacementError::not_found(format!(
                "Batch {} not found",
                batch_id
            )));
        }

        let total = to_count(self.students.count_by_batch(batch_id).await?)?;
        let placed = to_count(self.students.count_placed_by_batch(batch_id).await?)?;

        let updated = self.db.update_batch_counts(batch_id, total, placed).await?;
        let statistics = updated.statistics();

        info!(
            "Batch {} ({}) statistics: {}/{} placed ({}%)",
            updated.display_name(),
            batch_id,
            statistics.placed_students,
            statistics.total_students,
            statistics.placement_rate
        );
        Ok(statistics)
    }

    /// Recompute every batch of a department, one after another
    pub async fn recompute_department(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<(BatchRecord, BatchStatistics)>> {
        let batches = self.db.list_department_batches(department_id, None).await?;
        debug!(
            "Recomputing statistics for {} batches of department {}",
            batches.len(),
            department_id
        );

        let mut results = Vec::with_capacity(batches.len());
        for batch in batches {
            let statistics = self.recompute(batch.id).await?;
            results.push((batch, statistics));
        }
        Ok(results)
    }
}

fn to_count(value: u64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| PlacementError::internal(format!("Student count {} out of range", value)))
}
