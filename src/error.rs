//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while maintaining the attendance
//! ledger and calculating payroll.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid calendar month: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary configuration failed validation.
    ///
    /// Validation collects every violated constraint before reporting, so a
    /// single error lists all problems with the configuration at once.
    #[error("Invalid salary configuration: {}", .violations.join("; "))]
    InvalidSalaryConfig {
        /// Every constraint the configuration violated, in check order.
        violations: Vec<String>,
    },

    /// A calendar month outside 1-12 was supplied, or the (year, month)
    /// pair is not representable as a date.
    #[error("Invalid calendar month: {month} (expected 1-12)")]
    InvalidMonth {
        /// The offending month number.
        month: u32,
    },

    /// An attendance query was made with an inverted date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The attendance store failed to read or write a record.
    #[error("Attendance store error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
