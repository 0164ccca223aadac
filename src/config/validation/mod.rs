//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `storage_validators`: Database validators
//! - `service_validators`: Logging and scheduler validators
//! - `tests`: Test suite for all validators

mod service_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
