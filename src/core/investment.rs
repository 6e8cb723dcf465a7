//! Compound growth of a lump sum, net of tax on gains and discounted for inflation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InvestmentInput {
    pub principal: f64,
    /// Annual yield in percent (7.0 = 7%).
    pub annual_yield: f64,
    /// Tax rate on gains in percent.
    pub tax_rate: f64,
    /// Annual inflation in percent.
    pub inflation: f64,
    pub years: i32,
}

impl Default for InvestmentInput {
    fn default() -> Self {
        InvestmentInput {
            principal: 10000.0,
            annual_yield: 7.0,
            tax_rate: 26.0,
            inflation: 2.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub principal: f64,
    pub net_future_value: f64,
    pub real_value: f64,
    pub tax_paid: f64,
    pub years: i32,
}

/// Projects `principal` forward `years` years at the annual yield.
///
/// Tax is levied on the nominal profit with no floor, so a loss produces
/// negative tax. The real value discounts the net future value by cumulative
/// inflation over the same horizon.
pub fn calculate_investment(input: &InvestmentInput) -> InvestmentResult {
    let rate = input.annual_yield / 100.0;
    let tax = input.tax_rate / 100.0;
    let inflation = input.inflation / 100.0;

    let future_value = input.principal * (1.0 + rate).powi(input.years);
    let profit = future_value - input.principal;
    let tax_paid = profit * tax;
    let net_future_value = future_value - tax_paid;

    let real_value = net_future_value / (1.0 + inflation).powi(input.years);

    InvestmentResult {
        principal: input.principal,
        net_future_value,
        real_value,
        tax_paid,
        years: input.years,
    }
}
