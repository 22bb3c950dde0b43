//! Request types for the rent proration API.
//!
//! This module defines the JSON request structure for the
//! `/calculate-proration` endpoint and its boundary validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::response::ApiError;

/// Date format accepted for `start_date` and `end_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Request body for the `/calculate-proration` endpoint.
///
/// Every field is optional at the deserialization layer so that all absent
/// fields can be reported together by [`ProrationRequest::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProrationRequest {
    /// The full rent for one month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<Decimal>,
    /// The first occupied day, as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// The last occupied day, as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// The target month, as `YYYY-MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_year: Option<String>,
}

/// A request whose fields are all present and well-typed.
///
/// The month string is passed through untouched; its validation belongs to
/// the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// The full rent for one month (never negative).
    pub monthly_rent: Decimal,
    /// The first occupied day.
    pub start_date: NaiveDate,
    /// The last occupied day.
    pub end_date: NaiveDate,
    /// The target month string.
    pub month_year: String,
}

impl ProrationRequest {
    /// Checks that every field is present and parses the date strings.
    ///
    /// # Errors
    ///
    /// * `MISSING_FIELDS` listing every absent (or null) field
    /// * `INVALID_DATE` for a date that is not `YYYY-MM-DD`
    /// * `INVALID_RENT` for a negative monthly rent
    pub fn validate(self) -> Result<ValidatedRequest, ApiError> {
        let mut missing = Vec::new();
        if self.monthly_rent.is_none() {
            missing.push("monthly_rent");
        }
        if self.start_date.is_none() {
            missing.push("start_date");
        }
        if self.end_date.is_none() {
            missing.push("end_date");
        }
        if self.month_year.is_none() {
            missing.push("month_year");
        }

        let (Some(monthly_rent), Some(start_date), Some(end_date), Some(month_year)) = (
            self.monthly_rent,
            self.start_date,
            self.end_date,
            self.month_year,
        ) else {
            return Err(ApiError::missing_fields(&missing));
        };

        if monthly_rent < Decimal::ZERO {
            return Err(ApiError::invalid_rent(monthly_rent));
        }

        Ok(ValidatedRequest {
            monthly_rent,
            start_date: parse_date("start_date", &start_date)?,
            end_date: parse_date("end_date", &end_date)?,
            month_year,
        })
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ApiError::invalid_date(field, value))
}
