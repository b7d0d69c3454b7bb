//! Attendance summarization.
//!
//! This module aggregates a period's attendance records into status counts,
//! the paid/unpaid leave split, and an attendance percentage.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};

use super::round2;

/// Aggregates attendance records for one employee over one period.
///
/// The records are expected to already be restricted to the period being
/// summarized (one record per day, as the ledger guarantees).
/// `days_completed` is the number of records, not the number of days in the
/// month: if attendance was only marked for 20 of 30 days, it is 20.
///
/// The leave split is aggregate-only: `paid_leave_days` is the leave count
/// capped by the quota and `unpaid_leave_days` is the excess. Which specific
/// calendar dates were paid is deliberately not assigned, since payroll
/// multiplies counts by a flat daily rate.
///
/// The attendance percentage weighs half days at 0.5 and counts paid leave
/// as presence. Zero marked days yields exactly 0%, never a division error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::summarize_attendance;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, Utc};
///
/// let records: Vec<AttendanceRecord> = (1..=4)
///     .map(|day| {
///         AttendanceRecord::new(
///             "emp_001",
///             NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
///             if day == 4 { AttendanceStatus::Leave } else { AttendanceStatus::Present },
///             Utc::now(),
///         )
///     })
///     .collect();
///
/// let summary = summarize_attendance(&records, 2);
/// assert_eq!(summary.present_days, 3);
/// assert_eq!(summary.paid_leave_days, 1);
/// assert_eq!(summary.remaining_leave_days, 1);
/// assert_eq!(summary.days_completed, 4);
/// ```
pub fn summarize_attendance(
    records: &[AttendanceRecord],
    allowed_leave_days: u32,
) -> AttendanceSummary {
    let mut present_days = 0u32;
    let mut half_days = 0u32;
    let mut leave_days = 0u32;
    let mut absent_days = 0u32;

    for record in records {
        match record.status {
            AttendanceStatus::Present => present_days += 1,
            AttendanceStatus::Half => half_days += 1,
            AttendanceStatus::Leave => leave_days += 1,
            AttendanceStatus::Absent => absent_days += 1,
        }
    }

    let paid_leave_days = leave_days.min(allowed_leave_days);
    let unpaid_leave_days = leave_days.saturating_sub(allowed_leave_days);
    let remaining_leave_days = allowed_leave_days.saturating_sub(leave_days);
    let days_completed = present_days + half_days + leave_days + absent_days;

    let attendance_percentage = if days_completed > 0 {
        let effective_present = Decimal::from(present_days)
            + Decimal::from(half_days) / Decimal::TWO
            + Decimal::from(paid_leave_days);
        round2(effective_present / Decimal::from(days_completed) * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    AttendanceSummary {
        present_days,
        half_days,
        leave_days,
        absent_days,
        paid_leave_days,
        unpaid_leave_days,
        remaining_leave_days,
        days_completed,
        attendance_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Builds one record per status in `statuses`, on consecutive March days.
    fn make_records(statuses: &[AttendanceStatus]) -> Vec<AttendanceRecord> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                AttendanceRecord::new(
                    "emp_001",
                    NaiveDate::from_ymd_opt(2025, 3, i as u32 + 1).unwrap(),
                    *status,
                    Utc::now(),
                )
            })
            .collect()
    }

    fn repeated(status: AttendanceStatus, count: usize) -> Vec<AttendanceStatus> {
        vec![status; count]
    }

    #[test]
    fn test_counts_each_status() {
        let mut statuses = repeated(AttendanceStatus::Present, 20);
        statuses.extend(repeated(AttendanceStatus::Half, 4));
        statuses.extend(repeated(AttendanceStatus::Leave, 3));
        statuses.extend(repeated(AttendanceStatus::Absent, 1));
        let records = make_records(&statuses);

        let summary = summarize_attendance(&records, 2);

        assert_eq!(summary.present_days, 20);
        assert_eq!(summary.half_days, 4);
        assert_eq!(summary.leave_days, 3);
        assert_eq!(summary.absent_days, 1);
        assert_eq!(summary.days_completed, 28);
    }

    #[test]
    fn test_leave_split_with_quota_remaining() {
        let records = make_records(&repeated(AttendanceStatus::Leave, 1));
        let summary = summarize_attendance(&records, 2);

        assert_eq!(summary.paid_leave_days, 1);
        assert_eq!(summary.unpaid_leave_days, 0);
        assert_eq!(summary.remaining_leave_days, 1);
    }

    #[test]
    fn test_leave_split_over_quota() {
        let records = make_records(&repeated(AttendanceStatus::Leave, 5));
        let summary = summarize_attendance(&records, 2);

        assert_eq!(summary.paid_leave_days, 2);
        assert_eq!(summary.unpaid_leave_days, 3);
        assert_eq!(summary.remaining_leave_days, 0);
    }

    #[test]
    fn test_leave_split_with_zero_quota() {
        let records = make_records(&repeated(AttendanceStatus::Leave, 1));
        let summary = summarize_attendance(&records, 0);

        assert_eq!(summary.paid_leave_days, 0);
        assert_eq!(summary.unpaid_leave_days, 1);
        assert_eq!(summary.remaining_leave_days, 0);
    }

    #[test]
    fn test_days_completed_counts_records_not_month_days() {
        // Only 20 of 30 days marked: days_completed is 20.
        let records = make_records(&repeated(AttendanceStatus::Present, 20));
        let summary = summarize_attendance(&records, 2);
        assert_eq!(summary.days_completed, 20);
    }

    #[test]
    fn test_percentage_all_present() {
        let records = make_records(&repeated(AttendanceStatus::Present, 10));
        let summary = summarize_attendance(&records, 2);
        assert_eq!(summary.attendance_percentage, dec("100.00"));
    }

    #[test]
    fn test_percentage_weighs_half_days() {
        // 1 present + 1 half over 2 days: (1 + 0.5) / 2 = 75%.
        let records = make_records(&[AttendanceStatus::Present, AttendanceStatus::Half]);
        let summary = summarize_attendance(&records, 2);
        assert_eq!(summary.attendance_percentage, dec("75.00"));
    }

    #[test]
    fn test_percentage_counts_paid_leave_as_presence() {
        // 2 present + 1 paid leave over 3 days: 100%.
        let records = make_records(&[
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Leave,
        ]);
        let summary = summarize_attendance(&records, 2);
        assert_eq!(summary.attendance_percentage, dec("100.00"));
    }

    #[test]
    fn test_percentage_excludes_unpaid_leave() {
        // 2 present + 1 leave with zero quota: 2 / 3 = 66.67%.
        let records = make_records(&[
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Leave,
        ]);
        let summary = summarize_attendance(&records, 0);
        assert_eq!(summary.attendance_percentage, dec("66.67"));
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        // 1 present over 3 days: 33.333...% rounds to 33.33.
        let records = make_records(&[
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Absent,
        ]);
        let summary = summarize_attendance(&records, 2);
        assert_eq!(summary.attendance_percentage, dec("33.33"));
    }

    #[test]
    fn test_zero_records_yields_zero_percentage() {
        let summary = summarize_attendance(&[], 2);
        assert_eq!(summary.days_completed, 0);
        assert_eq!(summary.attendance_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_all_absent_yields_zero_percentage() {
        let records = make_records(&repeated(AttendanceStatus::Absent, 5));
        let summary = summarize_attendance(&records, 2);
        assert_eq!(summary.attendance_percentage, dec("0.00"));
    }
}
