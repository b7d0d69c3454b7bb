//! Salary configuration validation.
//!
//! Validation runs before payroll calculation and collects every violated
//! constraint rather than failing on the first, mirroring the multi-error
//! style of the application's forms. The calculator itself assumes
//! validated input and performs no defensive correction.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryConfig;

/// Checks a salary configuration against the engine's invariants.
///
/// Constraints:
///
/// * `monthly_salary` must be positive
/// * every percentage must be within `[0, 100]`
/// * `basic_percent + hra_percent` must not exceed 100
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalaryConfig`] listing *all* violated
/// constraints.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryConfig;
/// use payroll_engine::validation::validate_salary_config;
/// use rust_decimal::Decimal;
///
/// assert!(validate_salary_config(&SalaryConfig::simple(Decimal::from(30000))).is_ok());
///
/// let mut bad = SalaryConfig::simple(Decimal::from(-1));
/// bad.pf_percent = Decimal::from(150);
/// let error = validate_salary_config(&bad).unwrap_err();
/// assert!(error.to_string().contains("monthly salary"));
/// assert!(error.to_string().contains("PF percent"));
/// ```
pub fn validate_salary_config(config: &SalaryConfig) -> EngineResult<()> {
    let mut violations = Vec::new();

    if config.monthly_salary <= Decimal::ZERO {
        violations.push(format!(
            "monthly salary must be positive, got {}",
            config.monthly_salary
        ));
    }

    let percents = [
        ("basic percent", config.basic_percent),
        ("HRA percent", config.hra_percent),
        ("PF percent", config.pf_percent),
        ("ESI percent", config.esi_percent),
    ];
    for (name, value) in percents {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            violations.push(format!("{name} must be within 0-100, got {value}"));
        }
    }

    if config.basic_percent + config.hra_percent > Decimal::ONE_HUNDRED {
        violations.push(format!(
            "basic percent plus HRA percent must not exceed 100, got {}",
            config.basic_percent + config.hra_percent
        ));
    }

    if config.allowances_amount < Decimal::ZERO {
        violations.push(format!(
            "allowances amount must not be negative, got {}",
            config.allowances_amount
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::InvalidSalaryConfig { violations })
    }
}
