//! Savings growth from an initial balance plus fixed monthly deposits.

use super::compounding::annuity_future_value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SavingsInput {
    pub initial: f64,
    #[serde(rename = "monthly")]
    pub monthly_deposit: f64,
    /// Annual yield in percent.
    pub annual_yield: f64,
    /// Annual inflation in percent.
    pub inflation: f64,
    pub years: i32,
}

impl Default for SavingsInput {
    fn default() -> Self {
        SavingsInput {
            initial: 1000.0,
            monthly_deposit: 100.0,
            annual_yield: 3.0,
            inflation: 2.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResult {
    pub initial: f64,
    pub monthly_deposit: f64,
    pub future_value: f64,
    pub real_future_value: f64,
    pub total_deposits: f64,
    pub interest_earned: f64,
    pub years: i32,
    pub number_of_months: i64,
}

/// Compounds the initial balance monthly and adds the future value of the
/// monthly deposits over `years * 12` months.
pub fn calculate_savings(input: &SavingsInput) -> SavingsResult {
    let monthly_rate = input.annual_yield / 100.0 / 12.0;
    let number_of_months = i64::from(input.years) * 12;

    let future_value = input.initial * (1.0 + monthly_rate).powf(number_of_months as f64)
        + annuity_future_value(input.monthly_deposit, monthly_rate, number_of_months);

    let total_deposits = input.initial + input.monthly_deposit * number_of_months as f64;
    let interest_earned = future_value - total_deposits;

    let real_future_value = if input.inflation > 0.0 {
        future_value / (1.0 + input.inflation / 100.0).powi(input.years)
    } else {
        future_value
    };

    SavingsResult {
        initial: input.initial,
        monthly_deposit: input.monthly_deposit,
        future_value,
        real_future_value,
        total_deposits,
        interest_earned,
        years: input.years,
        number_of_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(initial: f64, monthly_deposit: f64, annual_yield: f64, inflation: f64, years: i32) -> SavingsInput {
        SavingsInput {
            initial,
            monthly_deposit,
            annual_yield,
            inflation,
            years,
        }
    }

    #[test]
    fn test_basic_savings() {
        let result = calculate_savings(&input(1000.0, 100.0, 5.0, 2.0, 10));

        assert_eq!(result.number_of_months, 120);
        assert_eq!(result.total_deposits, 13000.0);
        assert_relative_eq!(result.future_value, 17175.24, max_relative = 0.01);
        assert_relative_eq!(result.interest_earned, 4175.24, max_relative = 0.01);
        assert_relative_eq!(
            result.real_future_value,
            result.future_value / 1.02_f64.powi(10),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_yield_accumulates_linearly() {
        let result = calculate_savings(&input(5000.0, 200.0, 0.0, 2.0, 5));

        assert!(result.future_value.is_finite());
        assert_eq!(result.future_value, 5000.0 + 200.0 * 60.0);
        assert_eq!(result.total_deposits, 17000.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_zero_inflation_keeps_nominal_value() {
        let result = calculate_savings(&input(1000.0, 100.0, 3.0, 0.0, 10));
        assert_eq!(result.real_future_value, result.future_value);
    }

    #[test]
    fn test_negative_inflation_is_not_discounted() {
        let result = calculate_savings(&input(1000.0, 100.0, 3.0, -1.0, 10));
        assert_eq!(result.real_future_value, result.future_value);
    }

    #[test]
    fn test_high_yield_long_term() {
        let result = calculate_savings(&input(10000.0, 500.0, 8.0, 3.0, 30));

        let r = 0.08 / 12.0;
        let growth = (1.0_f64 + r).powf(360.0);
        let expected = 10000.0 * growth + 500.0 * (growth - 1.0) / r;
        assert_relative_eq!(result.future_value, expected, max_relative = 1e-12);
        assert_eq!(result.total_deposits, 10000.0 + 500.0 * 360.0);
        assert!(result.interest_earned > 0.0);
    }

    #[test]
    fn test_very_long_horizon_counts_every_month() {
        let result = calculate_savings(&input(1000.0, 100.0, 3.0, 2.0, 200_000_000));

        assert_eq!(result.number_of_months, 2_400_000_000);
        assert_relative_eq!(result.total_deposits, 1000.0 + 100.0 * 2.4e9);
        assert!(result.future_value.is_infinite());
    }
}
