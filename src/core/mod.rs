//! Core placement domain
//!
//! This module contains the batch business logic and the student store seam
//! it depends on.

pub mod batch;
pub mod student;
