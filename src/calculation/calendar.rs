//! Calendar month arithmetic.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Returns the number of days in the given calendar month.
///
/// Handles leap years and variable month lengths; every valid month has
/// between 28 and 31 days, so division by the result is always safe.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is outside 1-12 or
/// the (year, month) pair is not representable.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29); // leap year
/// assert_eq!(days_in_month(2025, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2025, 4).unwrap(), 30);
/// assert_eq!(days_in_month(2025, 12).unwrap(), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EngineError::InvalidMonth { month })?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidMonth { month })?;

    Ok(next_month_first.signed_duration_since(first).num_days() as u32)
}
