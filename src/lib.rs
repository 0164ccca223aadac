//! # placement-rs
//!
//! Batch lifecycle and placement statistics for a college placement-management
//! backend.
//!
//! A *batch* is a cohort of students admitted into a department's course in
//! the same year (`2024-2028 UG`). This crate validates batches and derives
//! their academic-year dates, tracks which year of study a batch is in,
//! graduates batches whose course has ended and keeps each batch's cached
//! placement counts in step with its students.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use placement_rs::{BatchService, Config, CourseType, NewBatch, StorageLayer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let storage = StorageLayer::new(config.storage()).await?;
//!     storage.migrate().await?;
//!
//!     let batches = BatchService::with_database_students(storage.database.clone());
//!     let department = uuid::Uuid::new_v4();
//!     let batch = batches
//!         .find_or_create_batch(&NewBatch::for_course(department, 2024, CourseType::Ug))
//!         .await?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     println!("{}", batch.full_display_name(today));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PlacementError, Result, ValidationError};

pub use core::batch::{
    AcademicStatus, BatchRecord, BatchService, BatchStatistics, BatchStatisticsAggregator,
    BatchYearsUpdate, CourseType, NewBatch, ValidatedBatch, generate_batch_code,
    validate_and_derive,
};
pub use core::student::{NewStudent, PlacementStatus, StudentRecord, StudentStore};
pub use services::GraduationScheduler;
pub use storage::StorageLayer;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("PLACEMENT_GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
