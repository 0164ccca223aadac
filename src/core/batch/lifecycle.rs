//! Batch lifecycle rules
//!
//! Validation of batch candidates, academic-calendar derivation and the
//! calendar predicates built on it. Everything here is pure: the current date
//! is always passed in by the caller.

use super::types::{AcademicStatus, NewBatch, ValidatedBatch};
use crate::utils::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

/// Accepted range for `start_year`
pub const START_YEAR_RANGE: RangeInclusive<i32> = 2020..=2050;
/// Accepted range for `end_year`
pub const END_YEAR_RANGE: RangeInclusive<i32> = 2022..=2055;
/// Accepted range for `course_duration`
pub const COURSE_DURATION_RANGE: RangeInclusive<i32> = 1..=6;

/// First month (1-based) of the academic year
pub const ACADEMIC_YEAR_START_MONTH: u32 = 4;
/// Last month (1-based) of the academic year
pub const ACADEMIC_YEAR_END_MONTH: u32 = 3;

static BATCH_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("batch code pattern is a valid regex"));

const ORDINAL_YEAR_LABELS: [&str; 6] = [
    "1st Year", "2nd Year", "3rd Year", "4th Year", "5th Year", "6th Year",
];

/// Validate a candidate and derive its academic-year dates.
///
/// Checks run in a fixed order and the first failure is returned; the
/// candidate itself is never modified.
pub fn validate_and_derive(candidate: &NewBatch) -> Result<ValidatedBatch, ValidationError> {
    validate_batch_code(&candidate.batch_code)?;
    validate_span(
        candidate.start_year,
        candidate.end_year,
        candidate.course_duration,
    )?;

    Ok(ValidatedBatch {
        candidate: candidate.clone(),
        academic_year_start: academic_year_start(candidate.start_year)?,
        academic_year_end: academic_year_end(candidate.end_year)?,
    })
}

pub fn validate_batch_code(batch_code: &str) -> Result<(), ValidationError> {
    if !BATCH_CODE_PATTERN.is_match(batch_code) {
        return Err(ValidationError::new(
            "batch_code",
            format!("must match YYYY-YYYY (got {:?})", batch_code),
        ));
    }
    Ok(())
}

/// Year range, duration range and span consistency.
///
/// The course type is already a [`super::CourseType`] at this point, so an
/// unknown type was rejected when it was parsed.
pub fn validate_span(
    start_year: i32,
    end_year: i32,
    course_duration: i32,
) -> Result<(), ValidationError> {
    if !START_YEAR_RANGE.contains(&start_year) {
        return Err(ValidationError::new(
            "start_year",
            format!(
                "must be between {} and {} (got {})",
                START_YEAR_RANGE.start(),
                START_YEAR_RANGE.end(),
                start_year
            ),
        ));
    }

    if !END_YEAR_RANGE.contains(&end_year) {
        return Err(ValidationError::new(
            "end_year",
            format!(
                "must be between {} and {} (got {})",
                END_YEAR_RANGE.start(),
                END_YEAR_RANGE.end(),
                end_year
            ),
        ));
    }

    if !COURSE_DURATION_RANGE.contains(&course_duration) {
        return Err(ValidationError::new(
            "course_duration",
            format!(
                "must be between {} and {} years (got {})",
                COURSE_DURATION_RANGE.start(),
                COURSE_DURATION_RANGE.end(),
                course_duration
            ),
        ));
    }

    if end_year <= start_year {
        return Err(ValidationError::new(
            "end_year",
            format!(
                "must be greater than start_year (got {} <= {})",
                end_year, start_year
            ),
        ));
    }

    if end_year - start_year != course_duration {
        return Err(ValidationError::new(
            "course_duration",
            format!(
                "must equal end_year - start_year ({}), got {}",
                end_year - start_year,
                course_duration
            ),
        ));
    }

    Ok(())
}

/// April 1 of `start_year`
pub fn academic_year_start(start_year: i32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(start_year, ACADEMIC_YEAR_START_MONTH, 1)
        .ok_or_else(|| ValidationError::new("start_year", "is not a representable year"))
}

/// March 31 of `end_year`
pub fn academic_year_end(end_year: i32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(end_year, ACADEMIC_YEAR_END_MONTH, 31)
        .ok_or_else(|| ValidationError::new("end_year", "is not a representable year"))
}

/// Calendar year in which the academic year containing `today` began
pub fn academic_start_year(today: NaiveDate) -> i32 {
    if today.month() >= ACADEMIC_YEAR_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Unclamped year of study; below 1 before the course starts and above the
/// duration once it has ended.
pub fn year_in_course(start_year: i32, today: NaiveDate) -> i32 {
    academic_start_year(today) - start_year + 1
}

/// Year of study clamped into `1..=course_duration`
pub fn current_academic_year(start_year: i32, course_duration: i32, today: NaiveDate) -> i32 {
    year_in_course(start_year, today).clamp(1, course_duration.max(1))
}

pub fn academic_status(
    is_graduated: bool,
    start_year: i32,
    course_duration: i32,
    today: NaiveDate,
) -> AcademicStatus {
    if is_graduated || year_in_course(start_year, today) > course_duration {
        return AcademicStatus::Alumni;
    }
    AcademicStatus::Year(current_academic_year(start_year, course_duration, today))
}

/// "1st Year" … "6th Year", then a generic "Nth Year"
pub fn ordinal_year_label(year: i32) -> String {
    usize::try_from(year)
        .ok()
        .and_then(|year| year.checked_sub(1))
        .and_then(|index| ORDINAL_YEAR_LABELS.get(index))
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("{}th Year", year))
}

/// Whether a batch ending in `end_year` is past its last academic year on
/// `today` (anything after March 31 of `end_year`).
pub fn should_graduate(end_year: i32, today: NaiveDate) -> bool {
    today.year() > end_year || (today.year() == end_year && today.month() > ACADEMIC_YEAR_END_MONTH)
}

/// Placed share of the batch as a rounded percentage; 0 for an empty batch
pub fn placement_rate(placed_students: i32, total_students: i32) -> u32 {
    if total_students <= 0 {
        return 0;
    }
    let ratio = f64::from(placed_students.max(0)) / f64::from(total_students);
    (ratio * 100.0).round() as u32
}
