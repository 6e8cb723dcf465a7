use super::ui::{self, OutputFormat};
use crate::core::savings::{SavingsInput, SavingsResult, calculate_savings};
use anyhow::Result;

/// Flags of the `savings` command. Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct SavingsArgs {
    pub initial: Option<f64>,
    pub monthly: Option<f64>,
    pub annual_yield: Option<f64>,
    pub inflation: Option<f64>,
    pub years: Option<i32>,
}

impl SavingsArgs {
    pub fn resolve(&self, base: &SavingsInput) -> SavingsInput {
        SavingsInput {
            initial: self.initial.unwrap_or(base.initial),
            monthly_deposit: self.monthly.unwrap_or(base.monthly_deposit),
            annual_yield: self.annual_yield.unwrap_or(base.annual_yield),
            inflation: self.inflation.unwrap_or(base.inflation),
            years: self.years.unwrap_or(base.years),
        }
    }
}

impl SavingsResult {
    pub fn display_as_table(&self, symbol: &str) -> String {
        let table = ui::summary_table(vec![
            ("Initial deposit", ui::money_cell(symbol, self.initial)),
            ("Monthly deposit", ui::money_cell(symbol, self.monthly_deposit)),
            ("Nominal final balance", ui::money_cell(symbol, self.future_value)),
            ("Real final balance", ui::money_cell(symbol, self.real_future_value)),
            ("Total deposits", ui::money_cell(symbol, self.total_deposits)),
            ("Interest earned", ui::money_cell(symbol, self.interest_earned)),
            (
                "Savings period",
                ui::value_cell(format!(
                    "{} years ({} months)",
                    self.years, self.number_of_months
                )),
            ),
        ]);

        format!(
            "{}\n\n{table}",
            ui::style_text("Savings Growth", ui::StyleType::Title)
        )
    }
}

pub fn output(args: &SavingsArgs, defaults: &SavingsInput, symbol: &str, format: OutputFormat) -> Result<String> {
    let input = args.resolve(defaults);
    let result = calculate_savings(&input);
    ui::render(format, &result, |r| r.display_as_table(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SavingsArgs {
            monthly: Some(250.0),
            annual_yield: Some(0.0),
            ..Default::default()
        };
        let input = args.resolve(&SavingsInput::default());

        assert_eq!(input.initial, 1000.0);
        assert_eq!(input.monthly_deposit, 250.0);
        assert_eq!(input.annual_yield, 0.0);
        assert_eq!(input.years, 10);
    }

    #[test]
    fn test_table_shows_period_and_totals() {
        let args = SavingsArgs {
            annual_yield: Some(0.0),
            ..Default::default()
        };
        let output = calculate_savings(&args.resolve(&SavingsInput::default())).display_as_table("$");

        assert!(output.contains("10 years (120 months)"));
        assert!(output.contains("$13000.00"));
        assert!(output.contains("Interest earned"));
    }
}
