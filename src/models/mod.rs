//! Data models for the payroll engine.
//!
//! This module contains the attendance, salary configuration, summary, and
//! breakdown types shared across the ledger and calculation modules.

mod attendance;
mod breakdown;
mod salary_config;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use breakdown::SalaryBreakdown;
pub use salary_config::{DEFAULT_ALLOWED_LEAVE_DAYS, SalaryConfig};
pub use summary::AttendanceSummary;
