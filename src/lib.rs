//! Staff Attendance & Payroll Calculation Engine
//!
//! This crate turns a daily attendance log and a salary configuration into a
//! per-month, per-employee payroll breakdown: leave accounting, pro-ration,
//! statutory PF/ESI deductions, and consistent monetary rounding.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod ledger;
pub mod models;
pub mod validation;
