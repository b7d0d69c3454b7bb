//! Attendance summary model.
//!
//! This module contains the [`AttendanceSummary`] type produced by
//! aggregating a period's attendance records. It is derived data, never
//! persisted: UI views and the payroll calculator both consume it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated attendance for one employee over one period.
///
/// Counts are per status; the leave split is derived from the employee's
/// paid-leave quota. Which specific leave dates were paid versus unpaid is
/// deliberately not tracked: payroll multiplies counts by a flat daily rate,
/// so only the aggregate matters.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceSummary;
/// use rust_decimal::Decimal;
///
/// let summary = AttendanceSummary {
///     present_days: 28,
///     half_days: 0,
///     leave_days: 1,
///     absent_days: 1,
///     paid_leave_days: 1,
///     unpaid_leave_days: 0,
///     remaining_leave_days: 1,
///     days_completed: 30,
///     attendance_percentage: Decimal::new(9667, 2),
/// };
/// assert_eq!(summary.days_completed, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of full days worked.
    pub present_days: u32,
    /// Number of half days worked.
    pub half_days: u32,
    /// Total number of leave days taken (paid and unpaid).
    pub leave_days: u32,
    /// Number of absent days.
    pub absent_days: u32,
    /// Leave days paid at the full daily rate, capped by the quota.
    pub paid_leave_days: u32,
    /// Leave days beyond the quota, unpaid.
    pub unpaid_leave_days: u32,
    /// Quota days still unused this period.
    pub remaining_leave_days: u32,
    /// Total number of records counted. This is the number of days actually
    /// marked, not the number of days in the month.
    pub days_completed: u32,
    /// Effective presence as a percentage of marked days, rounded to two
    /// decimal places. Exactly zero when no days were marked.
    pub attendance_percentage: Decimal,
}
