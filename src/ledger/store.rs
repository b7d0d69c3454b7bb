//! Attendance storage abstraction.
//!
//! The ledger does not depend on any storage technology: it talks to an
//! [`AttendanceStore`] trait. This module provides the trait and an
//! in-memory implementation used as the default backend and in tests; a
//! persistent backend lives with the application's persistence layer and
//! implements the same trait.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

/// Keyed storage for attendance records.
///
/// Records are keyed by `(employee_id, date)`. Implementations must make
/// `put` atomic per key: concurrent writes to the same key may race
/// (last-writer-wins), but a reader must never observe a partial record.
pub trait AttendanceStore: Send + Sync {
    /// Returns the record for the given key, if any.
    fn get(&self, employee_id: &str, date: NaiveDate) -> EngineResult<Option<AttendanceRecord>>;

    /// Inserts or replaces the record under its `(employee_id, date)` key.
    fn put(&self, record: AttendanceRecord) -> EngineResult<()>;

    /// Deletes the record for the given key. Returns whether a record was
    /// actually removed.
    fn delete(&self, employee_id: &str, date: NaiveDate) -> EngineResult<bool>;

    /// Returns every record stored for the given employee, in no particular
    /// order.
    fn records_for_employee(&self, employee_id: &str) -> EngineResult<Vec<AttendanceRecord>>;
}

/// In-memory [`AttendanceStore`] backed by a `RwLock<HashMap>`.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::{AttendanceStore, InMemoryAttendanceStore};
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, Utc};
///
/// let store = InMemoryAttendanceStore::new();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let record = AttendanceRecord::new("emp_001", date, AttendanceStatus::Present, Utc::now());
///
/// store.put(record.clone()).unwrap();
/// assert_eq!(store.get("emp_001", date).unwrap(), Some(record));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: RwLock<HashMap<(String, NaiveDate), AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> EngineError {
        EngineError::Storage {
            message: "attendance store lock poisoned".to_string(),
        }
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn get(&self, employee_id: &str, date: NaiveDate) -> EngineResult<Option<AttendanceRecord>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records.get(&(employee_id.to_string(), date)).cloned())
    }

    fn put(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        records.insert((record.employee_id.clone(), record.date), record);
        Ok(())
    }

    fn delete(&self, employee_id: &str, date: NaiveDate) -> EngineResult<bool> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;
        Ok(records.remove(&(employee_id.to_string(), date)).is_some())
    }

    fn records_for_employee(&self, employee_id: &str) -> EngineResult<Vec<AttendanceRecord>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;
        Ok(records
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
