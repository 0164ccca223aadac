//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use chrono::NaiveDate;
use placement_rs::core::batch::{BatchRecord, CourseType, NewBatch};
use placement_rs::core::student::{NewStudent, PlacementStatus};
use uuid::Uuid;

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Factory for creating batch candidates
pub struct BatchFactory;

impl BatchFactory {
    /// A four-year UG batch in a fresh department
    pub fn undergraduate(start_year: i32) -> NewBatch {
        Self::undergraduate_in(Uuid::new_v4(), start_year)
    }

    /// A four-year UG batch in the given department
    pub fn undergraduate_in(department_id: Uuid, start_year: i32) -> NewBatch {
        NewBatch::for_course(department_id, start_year, CourseType::Ug)
    }

    /// A two-year PG batch in the given department
    pub fn postgraduate_in(department_id: Uuid, start_year: i32) -> NewBatch {
        NewBatch::for_course(department_id, start_year, CourseType::Pg)
    }

    /// A candidate with an explicit span, consistent or not
    pub fn with_span(start_year: i32, end_year: i32, course_duration: i32) -> NewBatch {
        NewBatch {
            batch_code: format!("{}-{}", start_year, end_year),
            start_year,
            end_year,
            course_type: CourseType::Ug,
            course_duration,
            department_id: Uuid::new_v4(),
            created_by: None,
        }
    }
}

/// Factory for creating students
pub struct StudentFactory;

impl StudentFactory {
    /// One student of the batch with the given status
    pub fn create(batch: &BatchRecord, placement_status: PlacementStatus) -> NewStudent {
        NewStudent {
            batch_id: batch.id,
            department_id: batch.department_id,
            full_name: format!("Student {}", &Uuid::new_v4().to_string()[..8]),
            placement_status,
        }
    }

    /// `placed` placed students followed by `not_placed` unplaced ones
    pub fn cohort(batch: &BatchRecord, placed: usize, not_placed: usize) -> Vec<NewStudent> {
        let placed_statuses = [PlacementStatus::Placed, PlacementStatus::MultipleOffers]
            .into_iter()
            .cycle()
            .take(placed);

        placed_statuses
            .chain(std::iter::repeat_n(PlacementStatus::NotPlaced, not_placed))
            .map(|status| Self::create(batch, status))
            .collect()
    }
}
