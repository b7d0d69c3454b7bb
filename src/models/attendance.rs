//! Attendance models.
//!
//! This module defines the [`AttendanceStatus`] enum and the
//! [`AttendanceRecord`] struct that together make up the daily attendance
//! log for an employee.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The attendance status assigned to a single employee-day.
///
/// Exactly one status applies per day; the statuses are mutually exclusive.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceStatus;
///
/// let status = AttendanceStatus::Half;
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"half\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked a full day.
    Present,
    /// The employee worked a half day (paid at half the daily rate).
    Half,
    /// The employee took a leave day (paid while within the monthly quota).
    Leave,
    /// The employee was absent (never paid).
    Absent,
}

/// A single day's attendance entry for one employee.
///
/// The identity of a record is the `(employee_id, date)` pair; the ledger
/// keeps at most one record per identity. Re-marking the same day overwrites
/// the status and refreshes `updated_at` while preserving `created_at`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, Utc};
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     status: AttendanceStatus::Present,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// assert_eq!(record.status, AttendanceStatus::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// When the record was first created. Preserved across re-marks.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Creates a fresh record with both timestamps set to `now`.
    pub fn new(
        employee_id: impl Into<String>,
        date: NaiveDate,
        status: AttendanceStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
