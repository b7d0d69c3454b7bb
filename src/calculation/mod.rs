//! Calculation logic for the payroll engine.
//!
//! This module contains the pure computation pipeline: calendar month
//! arithmetic, attendance summarization, salary structure resolution, and
//! the payroll calculation that combines them into a salary breakdown.

mod calendar;
mod payroll;
mod salary_structure;
mod summarizer;

pub use calendar::days_in_month;
pub use payroll::{calculate_monthly_payroll, calculate_payroll};
pub use salary_structure::{SalaryStructure, resolve_salary_structure};
pub use summarizer::summarize_attendance;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary or percentage value to two decimal places,
/// half-away-from-zero, and pins the scale so values serialize uniformly
/// (`1000.00`, never `1000`). Applied exactly once per published field.
pub(crate) fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
