//! Error handling for the placement service
//!
//! This module defines the crate-wide error type and its helpers.

mod helpers;
mod types;

pub use types::{PlacementError, Result, ValidationError};
