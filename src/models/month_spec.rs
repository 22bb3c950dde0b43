//! Target month model.
//!
//! This module contains the [`MonthSpec`] type, a validated year/month pair
//! parsed from `YYYY-MM` strings, together with its calendar boundaries.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// A calendar month identified by year and month number.
///
/// The first and last calendar days are resolved at construction, so a
/// `MonthSpec` always describes a month that exists in the proleptic
/// Gregorian calendar.
///
/// # Example
///
/// ```
/// use rent_proration::models::MonthSpec;
///
/// let february: MonthSpec = "2024-02".parse().unwrap();
/// assert_eq!(february.year(), 2024);
/// assert_eq!(february.month(), 2);
/// assert_eq!(february.days_in_month(), 29);
/// assert_eq!(february.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSpec {
    year: i32,
    month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl MonthSpec {
    /// Creates a month from its year and month number (1-12).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonthFormat`] when the month number is
    /// outside 1-12 or the year is outside the range `chrono` can represent.
    ///
    /// # Example
    ///
    /// ```
    /// use rent_proration::models::MonthSpec;
    ///
    /// assert!(MonthSpec::new(2023, 12).is_ok());
    /// assert!(MonthSpec::new(2023, 13).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonthFormat {
            value: format!("{:04}-{:02}", year, month),
        };

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = next_month_start
            .and_then(|date| date.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Returns the last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns the number of days in the month, accounting for leap years.
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }
}

impl FromStr for MonthSpec {
    type Err = EngineError;

    /// Parses a `YYYY-MM` string.
    ///
    /// Both parts must be plain ASCII digits; the month may be written with
    /// one or two digits (`2024-3` and `2024-03` are equivalent).
    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonthFormat {
            value: s.to_string(),
        };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if !is_ascii_digits(year) || !is_ascii_digits(month) || month.len() > 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        // Report the caller's string rather than the normalized one.
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for MonthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
