//! Batch lifecycle and placement statistics
//!
//! A batch is one cohort of students admitted together into a department's
//! course. This module holds the lifecycle rules (validation, academic-year
//! derivation, graduation eligibility), the statistics aggregator and the
//! query/factory operations built on the SeaORM store.

mod code;
pub mod lifecycle;
mod service;
mod statistics;
mod types;


// Re-export all public types
pub use code::{FALLBACK_COURSE_DURATION, default_duration, generate_batch_code};
pub use lifecycle::{should_graduate, validate_and_derive};
pub use service::BatchService;
pub use statistics::{BatchStatistics, BatchStatisticsAggregator};
pub use types::{
    AcademicStatus, BatchRecord, BatchYearsUpdate, CourseType, NewBatch, ValidatedBatch,
};
