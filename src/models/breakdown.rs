//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] type, the complete output of
//! a payroll calculation for one employee and one calendar month. It is an
//! immutable snapshot computed fresh on demand; the payslip renderer and UI
//! summary views consume it as-is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full earnings/deductions decomposition for one employee-month.
///
/// All monetary fields are rounded to two decimal places exactly once, so
/// re-serializing or re-displaying a breakdown never changes its values.
/// The breakdown is a pure function of the salary configuration, the
/// calendar month, and the attendance summary.
///
/// Two quirks are reproduced from the product's payslip rules rather than
/// "fixed" here:
///
/// * `unpaid_leave_deduction` is reported for payslip transparency but is
///   not part of `total_deductions` — unpaid leave is already excluded from
///   `total_earned` and therefore already counted in `attendance_deduction`.
/// * `attendance_deduction` is computed against `monthly_salary` while
///   `net_salary` starts from `gross_earnings`; with fixed allowances the
///   two bases differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The calendar year the breakdown covers.
    pub year: i32,
    /// The calendar month (1-12) the breakdown covers.
    pub month: u32,
    /// Number of days in the calendar month.
    pub days_in_month: u32,
    /// Monthly salary divided by the days in the month.
    pub daily_salary: Decimal,
    /// Basic pay component of the gross.
    pub basic_amount: Decimal,
    /// Housing allowance component of the gross.
    pub hra_amount: Decimal,
    /// Fixed allowances component of the gross.
    pub allowances_amount: Decimal,
    /// Basic + housing allowance + fixed allowances, independent of
    /// attendance.
    pub gross_earnings: Decimal,
    /// Pay earned for full days worked.
    pub present_earnings: Decimal,
    /// Pay earned for half days worked.
    pub half_day_earnings: Decimal,
    /// Pay earned for leave days within the paid quota.
    pub paid_leave_earnings: Decimal,
    /// Total attendance-earned pay (present + half + paid leave).
    pub total_earned: Decimal,
    /// Pay lost to absence and unpaid leave relative to a full month.
    pub attendance_deduction: Decimal,
    /// Provident fund deduction (zero when not included).
    pub pf_amount: Decimal,
    /// Employee state insurance deduction (zero when not included).
    pub esi_amount: Decimal,
    /// Pay lost specifically to over-quota leave. Display-only: already
    /// contained in `attendance_deduction`, never subtracted again.
    pub unpaid_leave_deduction: Decimal,
    /// Attendance deduction + PF + ESI.
    pub total_deductions: Decimal,
    /// Gross earnings minus total deductions.
    pub net_salary: Decimal,
    /// Whether the source configuration was in simple mode. Labeling only;
    /// the formulas are identical either way.
    pub is_simple_mode: bool,
}
