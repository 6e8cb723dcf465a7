use super::ui::{self, OutputFormat};
use crate::core::investment::{InvestmentInput, InvestmentResult, calculate_investment};
use anyhow::Result;

/// Flags of the `invest` command. Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct InvestArgs {
    pub principal: Option<f64>,
    pub annual_yield: Option<f64>,
    pub tax_rate: Option<f64>,
    pub inflation: Option<f64>,
    pub years: Option<i32>,
}

impl InvestArgs {
    pub fn resolve(&self, base: &InvestmentInput) -> InvestmentInput {
        InvestmentInput {
            principal: self.principal.unwrap_or(base.principal),
            annual_yield: self.annual_yield.unwrap_or(base.annual_yield),
            tax_rate: self.tax_rate.unwrap_or(base.tax_rate),
            inflation: self.inflation.unwrap_or(base.inflation),
            years: self.years.unwrap_or(base.years),
        }
    }
}

impl InvestmentResult {
    pub fn display_as_table(&self, symbol: &str) -> String {
        let table = ui::summary_table(vec![
            ("Initial amount", ui::money_cell(symbol, self.principal)),
            ("Nominal final value", ui::money_cell(symbol, self.net_future_value)),
            ("Real final value", ui::money_cell(symbol, self.real_value)),
            ("Total tax paid", ui::money_cell(symbol, self.tax_paid)),
            ("Total years", ui::value_cell(self.years)),
        ]);

        format!(
            "{}\n\n{table}",
            ui::style_text("Investment Growth", ui::StyleType::Title)
        )
    }
}

/// Resolves the input, runs the calculation and renders it in `format`.
pub fn output(args: &InvestArgs, defaults: &InvestmentInput, symbol: &str, format: OutputFormat) -> Result<String> {
    let input = args.resolve(defaults);
    let result = calculate_investment(&input);
    ui::render(format, &result, |r| r.display_as_table(symbol))
}
