//! Occupancy period model.
//!
//! This module contains the [`OccupancyPeriod`] type, the inclusive date range
//! a tenant occupies a property.

use chrono::NaiveDate;

use super::MonthSpec;
use crate::error::{EngineError, EngineResult};

/// The inclusive `[start_date, end_date]` interval a tenant occupies a property.
///
/// Construction enforces `start_date <= end_date`.
///
/// # Example
///
/// ```
/// use rent_proration::models::{MonthSpec, OccupancyPeriod};
/// use chrono::NaiveDate;
///
/// let period = OccupancyPeriod::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
/// )
/// .unwrap();
///
/// let january = MonthSpec::new(2024, 1).unwrap();
/// let (from, to) = period.overlap_with(&january).unwrap();
/// assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// assert_eq!(to, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyPeriod {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl OccupancyPeriod {
    /// Creates an occupancy period.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `start_date` is after
    /// `end_date`. A single-day period (`start_date == end_date`) is valid.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Intersects this period with a calendar month.
    ///
    /// Returns the occupied sub-range of the month as `(first, last)`, or
    /// `None` when the period does not touch the month at all.
    pub fn overlap_with(&self, month: &MonthSpec) -> Option<(NaiveDate, NaiveDate)> {
        let from = self.start_date.max(month.first_day());
        let to = self.end_date.min(month.last_day());

        (from <= to).then_some((from, to))
    }
}
