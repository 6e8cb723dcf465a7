use super::ui::{self, OutputFormat};
use crate::core::currency::{CurrencyInput, CurrencyResult, convert_currency};
use anyhow::Result;

/// Flags of the `currency` command. Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct CurrencyArgs {
    pub amount: Option<f64>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl CurrencyArgs {
    pub fn resolve(&self, base: &CurrencyInput) -> CurrencyInput {
        CurrencyInput {
            amount: self.amount.unwrap_or(base.amount),
            from: self.from.clone().unwrap_or_else(|| base.from.clone()),
            to: self.to.clone().unwrap_or_else(|| base.to.clone()),
        }
    }
}

impl CurrencyResult {
    pub fn display_as_table(&self) -> String {
        format!(
            "{:.2} {} = {} {}\n{}",
            self.amount,
            self.from,
            ui::style_text(&format!("{:.2}", self.converted_amount), ui::StyleType::TotalValue),
            self.to,
            ui::style_text(
                &format!(
                    "Exchange rate: 1 {} = {:.4} {}",
                    self.from, self.exchange_rate, self.to
                ),
                ui::StyleType::Subtle
            )
        )
    }
}

/// Converts and prints the result. An unsupported code is returned as the error.
pub fn output(args: &CurrencyArgs, defaults: &CurrencyInput, format: OutputFormat) -> Result<String> {
    let input = args.resolve(defaults);
    let result = convert_currency(&input)?;
    ui::render(format, &result, CurrencyResult::display_as_table)
}
