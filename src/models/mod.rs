//! Core data models for the rent proration service.
//!
//! This module contains the value types passed into and returned from the
//! proration calculator.

mod month_spec;
mod occupancy_period;
mod proration_result;

pub use month_spec::MonthSpec;
pub use occupancy_period::OccupancyPeriod;
pub use proration_result::ProrationResult;
