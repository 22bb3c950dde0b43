//! Rent proration calculation.
//!
//! This module provides the functions that allocate a monthly rent across the
//! days of a target month that fall inside an occupancy period.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::models::{MonthSpec, OccupancyPeriod, ProrationResult};

/// Number of decimal places monetary output is rounded to.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to [`MONEY_DECIMAL_PLACES`], half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the rent owed for `month_year` given an occupancy period.
///
/// The month string is parsed first, then the date range is validated, then
/// the occupancy is intersected with the month and the rent prorated by day.
///
/// # Arguments
///
/// * `monthly_rent` - The full rent for one month
/// * `start_date` - The first occupied day (inclusive)
/// * `end_date` - The last occupied day (inclusive)
/// * `month_year` - The target month as `YYYY-MM`
///
/// # Errors
///
/// * [`EngineError::InvalidMonthFormat`](crate::error::EngineError::InvalidMonthFormat)
///   if `month_year` is not a valid `YYYY-MM` month
/// * [`EngineError::InvalidDateRange`](crate::error::EngineError::InvalidDateRange)
///   if `start_date` is after `end_date`
///
/// # Examples
///
/// ```
/// use rent_proration::calculation::calculate_proration;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_proration(
///     Decimal::from(3000),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     "2024-01",
/// )
/// .unwrap();
///
/// assert_eq!(result.days_in_month, 31);
/// assert_eq!(result.days_occupied, 17);
/// assert_eq!(result.daily_rate, Decimal::from_str("96.77").unwrap());
/// assert_eq!(result.prorated_amount, Decimal::from_str("1645.16").unwrap());
/// ```
pub fn calculate_proration(
    monthly_rent: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    month_year: &str,
) -> EngineResult<ProrationResult> {
    let month: MonthSpec = month_year.parse()?;
    let period = OccupancyPeriod::new(start_date, end_date)?;

    Ok(prorate(monthly_rent, &period, month))
}

/// Prorates a monthly rent for already-validated inputs.
///
/// The daily rate is always reported, even when the period does not touch
/// the month and nothing is owed.
pub fn prorate(monthly_rent: Decimal, period: &OccupancyPeriod, month: MonthSpec) -> ProrationResult {
    let days_in_month = month.days_in_month();
    let daily_rate = monthly_rent / Decimal::from(days_in_month);

    let Some((occupied_from, occupied_to)) = period.overlap_with(&month) else {
        return ProrationResult {
            monthly_rent: round_money(monthly_rent),
            prorated_amount: round_money(Decimal::ZERO),
            days_in_month,
            days_occupied: 0,
            daily_rate: round_money(daily_rate),
            calculation_details: format!("No occupancy in {}", month),
        };
    };

    // Both ends lie in the target month.
    let days_occupied = occupied_to.day() - occupied_from.day() + 1;
    let prorated_amount = daily_rate * Decimal::from(days_occupied);

    ProrationResult {
        monthly_rent: round_money(monthly_rent),
        prorated_amount: round_money(prorated_amount),
        days_in_month,
        days_occupied,
        daily_rate: round_money(daily_rate),
        calculation_details: format!(
            "Occupancy period: {} to {} ({} of {} days)",
            occupied_from, occupied_to, days_occupied, days_in_month
        ),
    }
}
