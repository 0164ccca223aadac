//! Shared utilities
//!
//! Error handling and logging setup used across the crate.

pub mod error;
pub mod logging;
