//! Attendance ledger operations and storage.
//!
//! The [`AttendanceLedger`] owns the mark/unmark/query lifecycle of daily
//! attendance entries on top of an [`AttendanceStore`] backend.

mod store;

pub use store::{AttendanceStore, InMemoryAttendanceStore};

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::calculation::days_in_month;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

/// The daily attendance ledger for all employees.
///
/// Each employee-day is an independent overwritable slot: marking a day that
/// is already marked overwrites its status (and refreshes the modification
/// timestamp) rather than raising an error, and unmarking a day that was
/// never marked is a no-op. There are no transition rules between statuses.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::{AttendanceLedger, InMemoryAttendanceStore};
/// use payroll_engine::models::AttendanceStatus;
/// use chrono::NaiveDate;
///
/// let ledger = AttendanceLedger::new(InMemoryAttendanceStore::new());
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
///
/// let record = ledger
///     .mark_attendance("emp_001", date, AttendanceStatus::Present)
///     .unwrap();
/// assert_eq!(record.status, AttendanceStatus::Present);
///
/// assert!(ledger.unmark_attendance("emp_001", date).unwrap());
/// assert!(!ledger.unmark_attendance("emp_001", date).unwrap());
/// ```
#[derive(Debug)]
pub struct AttendanceLedger<S: AttendanceStore> {
    store: S,
}

impl<S: AttendanceStore> AttendanceLedger<S> {
    /// Creates a ledger on top of the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Marks (or re-marks) attendance for one employee-day and returns the
    /// stored record.
    ///
    /// If the day is already marked, the status and modification timestamp
    /// are updated while the original creation timestamp is preserved.
    pub fn mark_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> EngineResult<AttendanceRecord> {
        let now = Utc::now();
        let record = match self.store.get(employee_id, date)? {
            Some(existing) => {
                debug!(
                    employee_id = %employee_id,
                    date = %date,
                    previous = ?existing.status,
                    status = ?status,
                    "re-marking attendance"
                );
                AttendanceRecord {
                    status,
                    updated_at: now,
                    ..existing
                }
            }
            None => {
                debug!(
                    employee_id = %employee_id,
                    date = %date,
                    status = ?status,
                    "marking attendance"
                );
                AttendanceRecord::new(employee_id, date, status, now)
            }
        };

        self.store.put(record.clone())?;
        Ok(record)
    }

    /// Removes the attendance record for one employee-day.
    ///
    /// Returns whether a record was actually removed. Unmarking a day that
    /// was never marked is not an error.
    pub fn unmark_attendance(&self, employee_id: &str, date: NaiveDate) -> EngineResult<bool> {
        let removed = self.store.delete(employee_id, date)?;
        debug!(
            employee_id = %employee_id,
            date = %date,
            removed,
            "unmarking attendance"
        );
        Ok(removed)
    }

    /// Returns every record for the employee with a date in `[start, end]`
    /// inclusive, sorted ascending by date so summaries are reproducible.
    pub fn attendance_for_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }

        let mut records: Vec<AttendanceRecord> = self
            .store
            .records_for_employee(employee_id)?
            .into_iter()
            .filter(|r| r.date >= start && r.date <= end)
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    /// Returns every record for the employee within the given calendar
    /// month, sorted ascending by date.
    pub fn attendance_for_month(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let days = days_in_month(year, month)?;
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(EngineError::InvalidMonth { month })?;
        let end = NaiveDate::from_ymd_opt(year, month, days)
            .ok_or(EngineError::InvalidMonth { month })?;
        self.attendance_for_range(employee_id, start, end)
    }

    /// Removes every record for the employee and returns how many were
    /// removed. Used when the employee itself is deleted.
    pub fn delete_all_for_employee(&self, employee_id: &str) -> EngineResult<usize> {
        let records = self.store.records_for_employee(employee_id)?;
        let mut removed = 0;
        for record in &records {
            if self.store.delete(employee_id, record.date)? {
                removed += 1;
            }
        }
        debug!(employee_id = %employee_id, removed, "deleted all attendance");
        Ok(removed)
    }
}
