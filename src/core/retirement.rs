//! Retirement pot projection and the withdrawal income it supports.

use super::compounding::annuity_future_value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RetirementInput {
    pub current_age: i32,
    pub retirement_age: i32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Annual withdrawal rate in percent.
    pub withdrawal_rate: f64,
    /// Annual yield in percent.
    pub annual_yield: f64,
    /// Annual inflation in percent.
    pub inflation: f64,
}

impl Default for RetirementInput {
    fn default() -> Self {
        RetirementInput {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50000.0,
            monthly_contribution: 500.0,
            withdrawal_rate: 4.0,
            annual_yield: 7.0,
            inflation: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    pub current_age: i32,
    pub retirement_age: i32,
    pub years_to_retirement: i64,
    pub retirement_savings: f64,
    pub annual_withdrawal: f64,
    pub monthly_withdrawal: f64,
    pub real_monthly_withdrawal: f64,
}

/// Projects savings up to retirement age and derives the withdrawal income.
///
/// The age gap is not validated: zero years leaves the savings untouched and a
/// negative gap discounts them backwards.
pub fn calculate_retirement(input: &RetirementInput) -> RetirementResult {
    let years_to_retirement = i64::from(input.retirement_age) - i64::from(input.current_age);
    let months_to_retirement = years_to_retirement * 12;
    let monthly_rate = input.annual_yield / 100.0 / 12.0;

    let retirement_savings = input.current_savings
        * (1.0 + monthly_rate).powf(months_to_retirement as f64)
        + annuity_future_value(input.monthly_contribution, monthly_rate, months_to_retirement);

    let annual_withdrawal = retirement_savings * (input.withdrawal_rate / 100.0);
    let monthly_withdrawal = annual_withdrawal / 12.0;
    let real_monthly_withdrawal =
        monthly_withdrawal / (1.0 + input.inflation / 100.0).powf(years_to_retirement as f64);

    RetirementResult {
        current_age: input.current_age,
        retirement_age: input.retirement_age,
        years_to_retirement,
        retirement_savings,
        annual_withdrawal,
        monthly_withdrawal,
        real_monthly_withdrawal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_input() -> RetirementInput {
        RetirementInput {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50000.0,
            monthly_contribution: 500.0,
            withdrawal_rate: 4.0,
            annual_yield: 7.0,
            inflation: 2.0,
        }
    }

    #[test]
    fn test_basic_retirement() {
        let result = calculate_retirement(&reference_input());

        assert_eq!(result.current_age, 30);
        assert_eq!(result.retirement_age, 65);
        assert_eq!(result.years_to_retirement, 35);
        assert_relative_eq!(result.retirement_savings, 1475834.89, max_relative = 0.01);
        assert_relative_eq!(result.annual_withdrawal, 59033.40, max_relative = 0.01);
        assert_relative_eq!(result.monthly_withdrawal, 4919.45, max_relative = 0.01);
        assert_relative_eq!(result.real_monthly_withdrawal, 2459.86, max_relative = 0.01);
    }

    #[test]
    fn test_zero_yield_accumulates_linearly() {
        let result = calculate_retirement(&RetirementInput {
            current_age: 40,
            retirement_age: 60,
            current_savings: 100000.0,
            monthly_contribution: 1000.0,
            withdrawal_rate: 5.0,
            annual_yield: 0.0,
            inflation: 3.0,
        });

        assert_eq!(result.years_to_retirement, 20);
        assert_eq!(result.retirement_savings, 340000.0);
        assert_relative_eq!(result.annual_withdrawal, 17000.0, epsilon = 1e-9);
        assert_relative_eq!(result.monthly_withdrawal, 1416.67, max_relative = 0.01);
        assert_relative_eq!(result.real_monthly_withdrawal, 784.73, max_relative = 0.01);
    }

    #[test]
    fn test_already_at_retirement_age() {
        let result = calculate_retirement(&RetirementInput {
            current_age: 65,
            ..reference_input()
        });

        assert_eq!(result.years_to_retirement, 0);
        assert_eq!(result.retirement_savings, 50000.0);
        assert_eq!(result.real_monthly_withdrawal, result.monthly_withdrawal);
    }

    #[test]
    fn test_past_retirement_age_is_not_rejected() {
        let result = calculate_retirement(&RetirementInput {
            current_age: 70,
            monthly_contribution: 0.0,
            ..reference_input()
        });

        assert_eq!(result.years_to_retirement, -5);
        assert!(result.retirement_savings < 50000.0);
        assert!(result.real_monthly_withdrawal > result.monthly_withdrawal);
    }

    #[test]
    fn test_extreme_age_gap_does_not_wrap() {
        let result = calculate_retirement(&RetirementInput {
            current_age: i32::MIN,
            ..reference_input()
        });
        assert_eq!(result.years_to_retirement, 65 - i64::from(i32::MIN));

        let result = calculate_retirement(&RetirementInput {
            current_age: i32::MAX,
            retirement_age: i32::MIN,
            ..reference_input()
        });
        assert_eq!(result.years_to_retirement, i64::from(i32::MIN) - i64::from(i32::MAX));
    }
}
