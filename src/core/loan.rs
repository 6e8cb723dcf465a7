//! Amortizing loan payments and a first-year payment breakdown.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of months reported in the payment breakdown.
pub const SCHEDULE_MONTHS: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoanInput {
    #[serde(rename = "amount")]
    pub principal: f64,
    /// Annual interest rate in percent.
    #[serde(rename = "rate")]
    pub annual_rate: f64,
    pub years: i32,
    /// Print the first-year payment breakdown.
    #[serde(rename = "monthly")]
    pub include_monthly_schedule: bool,
}

impl Default for LoanInput {
    fn default() -> Self {
        LoanInput {
            principal: 100000.0,
            annual_rate: 4.5,
            years: 30,
            include_monthly_schedule: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    pub month: i32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub years: i32,
    pub number_of_payments: i64,
    pub monthly_schedule: Vec<MonthlyBreakdown>,
}

/// Computes the fixed monthly payment of a fully amortizing loan.
///
/// The annuity formula is applied as-is: a zero rate or a zero term divides by
/// zero and the payment, total paid and total interest come back NaN or infinite.
///
/// When a schedule is requested exactly [`SCHEDULE_MONTHS`] months are reported,
/// even for terms shorter than a year. The balance keeps being reduced by the same
/// payment past payoff and goes negative.
pub fn calculate_loan(input: &LoanInput) -> LoanResult {
    let monthly_rate = input.annual_rate / 100.0 / 12.0;
    let number_of_payments = i64::from(input.years) * 12;

    // P * r * (1+r)^n / ((1+r)^n - 1)
    let growth = (1.0 + monthly_rate).powf(number_of_payments as f64);
    let monthly_payment = input.principal * monthly_rate * growth / (growth - 1.0);

    let total_paid = monthly_payment * number_of_payments as f64;
    let total_interest = total_paid - input.principal;

    if !monthly_payment.is_finite() {
        debug!(
            "Non-finite monthly payment for rate {}% over {} payments",
            input.annual_rate, number_of_payments
        );
    }

    let monthly_schedule = if input.include_monthly_schedule {
        first_year_schedule(input.principal, monthly_rate, monthly_payment)
    } else {
        Vec::new()
    };

    LoanResult {
        principal: input.principal,
        monthly_payment,
        total_paid,
        total_interest,
        years: input.years,
        number_of_payments,
        monthly_schedule,
    }
}

fn first_year_schedule(principal: f64, monthly_rate: f64, payment: f64) -> Vec<MonthlyBreakdown> {
    let mut balance = principal;
    (1..=SCHEDULE_MONTHS)
        .map(|month| {
            let interest_portion = balance * monthly_rate;
            let principal_portion = payment - interest_portion;
            balance -= principal_portion;
            MonthlyBreakdown {
                month,
                payment,
                principal_portion,
                interest_portion,
                remaining_balance: balance,
            }
        })
        .collect()
}
