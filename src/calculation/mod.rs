//! Calculation logic for the rent proration service.
//!
//! This module contains the proration calculator: intersecting an occupancy
//! period with a target month, counting occupied days, deriving the daily
//! rate and rounding the owed amount.

mod proration;

pub use proration::{MONEY_DECIMAL_PLACES, calculate_proration, prorate, round_money};
