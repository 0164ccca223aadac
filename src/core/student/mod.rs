//! Student store seam
//!
//! Students are owned by another part of the placement system. The batch
//! statistics aggregator only needs two counts from them, so the dependency
//! is expressed as the [`StudentStore`] trait; the SeaORM database implements
//! it over the `students` table.

mod types;

pub use types::{NewStudent, PlacementStatus, StudentRecord};

use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

/// Read access to the Student collection used by batch statistics
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Number of students enrolled in the batch
    async fn count_by_batch(&self, batch_id: Uuid) -> Result<u64>;

    /// Number of students in the batch whose status counts as placed
    /// (see [`PlacementStatus::is_placed`])
    async fn count_placed_by_batch(&self, batch_id: Uuid) -> Result<u64>;
}
