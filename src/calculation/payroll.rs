//! Payroll calculation.
//!
//! This module combines a salary configuration, a calendar month, and an
//! attendance summary into a full [`SalaryBreakdown`], and provides the
//! ledger-to-payslip composition used by request handlers.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::ledger::{AttendanceLedger, AttendanceStore};
use crate::models::{AttendanceSummary, SalaryBreakdown, SalaryConfig};
use crate::validation::validate_salary_config;

use super::calendar::days_in_month;
use super::round2;
use super::salary_structure::resolve_salary_structure;
use super::summarizer::summarize_attendance;

/// Calculates the salary breakdown for one employee-month.
///
/// The calculation is a pure function of its inputs: no clock, no global
/// state, and no defensive correction. Callers are expected to run
/// [`validate_salary_config`] first; for any valid configuration and
/// non-negative counts the function is total and cannot fail except for an
/// out-of-range month.
///
/// Attendance-earned pay is `present + half x 0.5 + paid leave`, priced at
/// the daily rate (`monthly_salary / days_in_month`). The attendance
/// deduction is the pay lost relative to a full month, measured against
/// `monthly_salary`. Unpaid leave is already excluded from the earned total,
/// so its separately reported deduction is never subtracted again.
///
/// Each earning and deduction line is rounded to two decimal places exactly
/// once; totals are sums of the rounded lines, so the published identity
/// `net = gross - (attendance deduction + PF + ESI)` holds exactly and
/// re-displaying a breakdown never changes it.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::{AttendanceSummary, SalaryConfig};
/// use rust_decimal::Decimal;
///
/// let config = SalaryConfig::simple(Decimal::from(30000));
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
///
/// // April 2025 has 30 days, so the daily rate is exactly 1000.
/// let breakdown = calculate_payroll(&config, 2025, 4, &summary).unwrap();
/// assert_eq!(breakdown.daily_salary, Decimal::from(1000));
/// assert_eq!(breakdown.net_salary, Decimal::from(29000));
/// ```
pub fn calculate_payroll(
    config: &SalaryConfig,
    year: i32,
    month: u32,
    summary: &AttendanceSummary,
) -> EngineResult<SalaryBreakdown> {
    let days = days_in_month(year, month)?;
    debug!(year, month, days, "calculating payroll");

    // Unrounded daily rate; each derived line is rounded independently.
    let daily = config.monthly_salary / Decimal::from(days);

    let structure = resolve_salary_structure(config);

    let present_earnings = round2(Decimal::from(summary.present_days) * daily);
    let half_day_earnings = round2(Decimal::from(summary.half_days) * daily / Decimal::TWO);
    let paid_leave_earnings = round2(Decimal::from(summary.paid_leave_days) * daily);
    let total_earned = present_earnings + half_day_earnings + paid_leave_earnings;

    let attendance_deduction = round2(config.monthly_salary - total_earned);
    let pf_amount = if config.include_pf {
        round2(total_earned * config.pf_percent / Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };
    let esi_amount = if config.include_esi {
        round2(total_earned * config.esi_percent / Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };
    // Reported for payslip transparency only; already contained in the
    // attendance deduction, so it is not part of the total.
    let unpaid_leave_deduction = round2(Decimal::from(summary.unpaid_leave_days) * daily);
    let total_deductions = attendance_deduction + pf_amount + esi_amount;

    let net_salary = structure.gross_earnings - total_deductions;

    Ok(SalaryBreakdown {
        year,
        month,
        days_in_month: days,
        daily_salary: round2(daily),
        basic_amount: structure.basic_amount,
        hra_amount: structure.hra_amount,
        allowances_amount: structure.allowances_amount,
        gross_earnings: structure.gross_earnings,
        present_earnings,
        half_day_earnings,
        paid_leave_earnings,
        total_earned,
        attendance_deduction,
        pf_amount,
        esi_amount,
        unpaid_leave_deduction,
        total_deductions,
        net_salary,
        is_simple_mode: config.is_simple_mode(),
    })
}

/// Runs the full ledger-to-payslip pipeline for one employee-month.
///
/// Validates the salary configuration (collecting every violation), loads
/// the month's attendance from the ledger, summarizes it against the
/// paid-leave quota, and calculates the breakdown. Returns both the summary
/// and the breakdown, since payslip renderers and UI views display the two
/// side by side.
pub fn calculate_monthly_payroll<S: AttendanceStore>(
    ledger: &AttendanceLedger<S>,
    config: &SalaryConfig,
    employee_id: &str,
    year: i32,
    month: u32,
) -> EngineResult<(AttendanceSummary, SalaryBreakdown)> {
    validate_salary_config(config)?;

    let records = ledger.attendance_for_month(employee_id, year, month)?;
    let summary = summarize_attendance(&records, config.allowed_leave_days);
    let breakdown = calculate_payroll(config, year, month, &summary)?;

    info!(
        employee_id = %employee_id,
        year,
        month,
        days_completed = summary.days_completed,
        net_salary = %breakdown.net_salary,
        "calculated monthly payroll"
    );

    Ok((summary, breakdown))
}
