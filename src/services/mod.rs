//! Background services
//!
//! Long-running jobs that `placementd run` drives on a timer.

pub mod graduation;

pub use graduation::{GraduationScheduler, shutdown_on};
