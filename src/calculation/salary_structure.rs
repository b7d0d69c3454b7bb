//! Salary structure resolution.
//!
//! This module expands a salary configuration into its earning components:
//! basic pay, housing allowance, fixed allowances, and the gross total.

use rust_decimal::Decimal;

use crate::models::SalaryConfig;

use super::round2;

/// The earning components resolved from a salary configuration.
///
/// Gross earnings are independent of attendance: they describe how the
/// configured monthly salary decomposes, not what was earned this month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryStructure {
    /// Basic pay: `monthly_salary * basic_percent / 100`, rounded.
    pub basic_amount: Decimal,
    /// Housing allowance: `monthly_salary * hra_percent / 100`, rounded.
    pub hra_amount: Decimal,
    /// Fixed allowances, taken verbatim from the configuration.
    pub allowances_amount: Decimal,
    /// Basic + housing allowance + fixed allowances.
    pub gross_earnings: Decimal,
}

/// Expands a salary configuration into earning components.
///
/// A flat ("simple") configuration falls out of the same formulas with
/// basic at 100% and housing at 0%; there is no separate code path.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::resolve_salary_structure;
/// use payroll_engine::models::SalaryConfig;
/// use rust_decimal::Decimal;
///
/// let structure = resolve_salary_structure(&SalaryConfig::simple(Decimal::from(30000)));
/// assert_eq!(structure.basic_amount, Decimal::from(30000));
/// assert_eq!(structure.gross_earnings, Decimal::from(30000));
/// ```
pub fn resolve_salary_structure(config: &SalaryConfig) -> SalaryStructure {
    let basic_amount = round2(config.monthly_salary * config.basic_percent / Decimal::ONE_HUNDRED);
    let hra_amount = round2(config.monthly_salary * config.hra_percent / Decimal::ONE_HUNDRED);
    let allowances_amount = round2(config.allowances_amount);
    let gross_earnings = basic_amount + hra_amount + allowances_amount;

    SalaryStructure {
        basic_amount,
        hra_amount,
        allowances_amount,
        gross_earnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_simple_config_gross_equals_monthly_salary() {
        let structure = resolve_salary_structure(&SalaryConfig::simple(dec("30000")));
        assert_eq!(structure.basic_amount, dec("30000"));
        assert_eq!(structure.hra_amount, dec("0"));
        assert_eq!(structure.allowances_amount, dec("0"));
        assert_eq!(structure.gross_earnings, dec("30000"));
    }

    #[test]
    fn test_itemized_split() {
        let mut config = SalaryConfig::simple(dec("30000"));
        config.basic_percent = dec("50");
        config.hra_percent = dec("20");
        config.allowances_amount = dec("2000");

        let structure = resolve_salary_structure(&config);

        assert_eq!(structure.basic_amount, dec("15000"));
        assert_eq!(structure.hra_amount, dec("6000"));
        assert_eq!(structure.allowances_amount, dec("2000"));
        assert_eq!(structure.gross_earnings, dec("23000"));
    }

    #[test]
    fn test_allowances_can_push_gross_above_monthly_salary() {
        // basic 100% plus a fixed allowance: gross exceeds monthly salary.
        let mut config = SalaryConfig::simple(dec("30000"));
        config.allowances_amount = dec("1500");

        let structure = resolve_salary_structure(&config);
        assert_eq!(structure.gross_earnings, dec("31500"));
    }

    #[test]
    fn test_components_round_to_two_decimals() {
        let mut config = SalaryConfig::simple(dec("10000"));
        config.basic_percent = dec("33.333");
        config.hra_percent = dec("33.333");

        let structure = resolve_salary_structure(&config);

        // 10000 * 33.333 / 100 = 3333.3, exact at one decimal.
        assert_eq!(structure.basic_amount, dec("3333.30"));
        assert_eq!(structure.hra_amount, dec("3333.30"));
        assert_eq!(structure.gross_earnings, dec("6666.60"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 1000 * 0.0125% = 0.125, a midpoint at two decimals. Half-away
        // rounding gives 0.13 (banker's rounding would give 0.12).
        let mut config = SalaryConfig::simple(dec("1000"));
        config.basic_percent = dec("0.0125");

        let structure = resolve_salary_structure(&config);
        assert_eq!(structure.basic_amount, dec("0.13"));
    }

    #[test]
    fn test_zero_salary_yields_zero_components() {
        // Validation rejects this for payroll, but the resolver itself is
        // total over its inputs.
        let structure = resolve_salary_structure(&SalaryConfig::simple(dec("0")));
        assert_eq!(structure.gross_earnings, dec("0"));
    }
}
