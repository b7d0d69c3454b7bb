//! Salary configuration model.
//!
//! This module defines the [`SalaryConfig`] struct that describes how an
//! employee's monthly pay is structured: the basic/housing split, fixed
//! allowances, statutory deduction participation, and the paid-leave quota.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default monthly quota of paid leave days.
pub const DEFAULT_ALLOWED_LEAVE_DAYS: u32 = 2;

fn default_allowed_leave_days() -> u32 {
    DEFAULT_ALLOWED_LEAVE_DAYS
}

/// How an employee's monthly salary is structured.
///
/// A configuration is either "simple" (the whole salary is basic pay, no
/// statutory deductions) or itemized into basic pay, housing allowance, and
/// fixed allowances with optional PF/ESI participation. Simple mode is a
/// derived property, not a stored flag: the same formulas apply either way.
///
/// Invariants, enforced by [`crate::validation::validate_salary_config`]:
/// `monthly_salary > 0`, every percentage within `[0, 100]`, and
/// `basic_percent + hra_percent <= 100`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryConfig;
/// use rust_decimal::Decimal;
///
/// let config = SalaryConfig::simple(Decimal::from(30000));
/// assert!(config.is_simple_mode());
/// assert_eq!(config.allowed_leave_days, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// The full monthly salary amount.
    pub monthly_salary: Decimal,
    /// Percentage of the monthly salary paid as basic pay.
    pub basic_percent: Decimal,
    /// Percentage of the monthly salary paid as housing allowance.
    pub hra_percent: Decimal,
    /// Fixed allowances paid on top of basic and housing, as an amount.
    pub allowances_amount: Decimal,
    /// Whether provident fund is deducted.
    pub include_pf: bool,
    /// Provident fund deduction as a percentage of attendance-earned pay.
    pub pf_percent: Decimal,
    /// Whether employee state insurance is deducted.
    pub include_esi: bool,
    /// ESI deduction as a percentage of attendance-earned pay.
    pub esi_percent: Decimal,
    /// Monthly quota of leave days paid at the full daily rate.
    #[serde(default = "default_allowed_leave_days")]
    pub allowed_leave_days: u32,
}

impl SalaryConfig {
    /// Creates a simple-mode configuration: the whole salary is basic pay,
    /// no housing allowance, no fixed allowances, no statutory deductions,
    /// and the default paid-leave quota.
    pub fn simple(monthly_salary: Decimal) -> Self {
        Self {
            monthly_salary,
            basic_percent: Decimal::ONE_HUNDRED,
            hra_percent: Decimal::ZERO,
            allowances_amount: Decimal::ZERO,
            include_pf: false,
            pf_percent: Decimal::ZERO,
            include_esi: false,
            esi_percent: Decimal::ZERO,
            allowed_leave_days: DEFAULT_ALLOWED_LEAVE_DAYS,
        }
    }

    /// Returns true if this configuration is in simple mode.
    ///
    /// Simple mode means the whole salary is basic pay (basic 100%, housing
    /// 0%) and neither PF nor ESI is deducted. The flag is purely a display
    /// label; it does not change any payroll formula.
    pub fn is_simple_mode(&self) -> bool {
        self.basic_percent == Decimal::ONE_HUNDRED
            && self.hra_percent == Decimal::ZERO
            && !self.include_pf
            && !self.include_esi
    }
}
