//! Proration result model.
//!
//! This module contains the [`ProrationResult`] type returned by the
//! calculator and serialized as the body of a successful API response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of prorating a monthly rent over one target month.
///
/// Monetary fields are already rounded to two decimal places and serialize
/// as JSON numbers.
///
/// # Example
///
/// ```
/// use rent_proration::models::ProrationResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = ProrationResult {
///     monthly_rent: Decimal::from(3000),
///     prorated_amount: Decimal::from_str("1645.16").unwrap(),
///     days_in_month: 31,
///     days_occupied: 17,
///     daily_rate: Decimal::from_str("96.77").unwrap(),
///     calculation_details: "Occupancy period: 2024-01-15 to 2024-01-31 (17 of 31 days)".to_string(),
/// };
///
/// assert!(result.is_occupied());
/// assert!(!result.is_full_month());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProrationResult {
    /// The monthly rent the proration was based on.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_rent: Decimal,
    /// The rent owed for the occupied days of the target month.
    #[serde(with = "rust_decimal::serde::float")]
    pub prorated_amount: Decimal,
    /// Total number of days in the target month.
    pub days_in_month: u32,
    /// Number of days occupied within the target month (both ends counted).
    pub days_occupied: u32,
    /// The monthly rent divided by the days in the target month.
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_rate: Decimal,
    /// Human-readable summary of the calculation.
    pub calculation_details: String,
}

impl ProrationResult {
    /// Returns `true` if any day of the target month was occupied.
    pub fn is_occupied(&self) -> bool {
        self.days_occupied > 0
    }

    /// Returns `true` if every day of the target month was occupied.
    pub fn is_full_month(&self) -> bool {
        self.days_occupied == self.days_in_month
    }
}
