use super::ui::{self, OutputFormat};
use crate::core::retirement::{RetirementInput, RetirementResult, calculate_retirement};
use anyhow::Result;

/// Flags of the `retirement` command. Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct RetirementArgs {
    pub current_age: Option<i32>,
    pub retirement_age: Option<i32>,
    pub current_savings: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub withdrawal_rate: Option<f64>,
    pub annual_yield: Option<f64>,
    pub inflation: Option<f64>,
}

impl RetirementArgs {
    pub fn resolve(&self, base: &RetirementInput) -> RetirementInput {
        RetirementInput {
            current_age: self.current_age.unwrap_or(base.current_age),
            retirement_age: self.retirement_age.unwrap_or(base.retirement_age),
            current_savings: self.current_savings.unwrap_or(base.current_savings),
            monthly_contribution: self
                .monthly_contribution
                .unwrap_or(base.monthly_contribution),
            withdrawal_rate: self.withdrawal_rate.unwrap_or(base.withdrawal_rate),
            annual_yield: self.annual_yield.unwrap_or(base.annual_yield),
            inflation: self.inflation.unwrap_or(base.inflation),
        }
    }
}

impl RetirementResult {
    pub fn display_as_table(&self, symbol: &str) -> String {
        let table = ui::summary_table(vec![
            ("Current age", ui::value_cell(self.current_age)),
            ("Retirement age", ui::value_cell(self.retirement_age)),
            ("Years to retirement", ui::value_cell(self.years_to_retirement)),
            ("Retirement savings", ui::money_cell(symbol, self.retirement_savings)),
            ("Annual withdrawal", ui::money_cell(symbol, self.annual_withdrawal)),
            ("Monthly withdrawal", ui::money_cell(symbol, self.monthly_withdrawal)),
            (
                "Inflation-adjusted monthly withdrawal",
                ui::money_cell(symbol, self.real_monthly_withdrawal),
            ),
        ]);

        format!(
            "{}\n\n{table}",
            ui::style_text("Retirement Projection", ui::StyleType::Title)
        )
    }
}

pub fn output(
    args: &RetirementArgs,
    defaults: &RetirementInput,
    symbol: &str,
    format: OutputFormat,
) -> Result<String> {
    let input = args.resolve(defaults);
    let result = calculate_retirement(&input);
    ui::render(format, &result, |r| r.display_as_table(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = RetirementArgs {
            current_age: Some(45),
            withdrawal_rate: Some(3.5),
            ..Default::default()
        };
        let input = args.resolve(&RetirementInput::default());

        assert_eq!(input.current_age, 45);
        assert_eq!(input.retirement_age, 65);
        assert_eq!(input.withdrawal_rate, 3.5);
        assert_eq!(input.current_savings, 50000.0);
    }

    #[test]
    fn test_table_shows_ages_and_withdrawals() {
        let result = calculate_retirement(&RetirementArgs::default().resolve(&RetirementInput::default()));
        let output = result.display_as_table("€");

        assert!(output.contains("Years to retirement"));
        assert!(output.contains("35"));
        assert!(output.contains(&ui::money("€", result.monthly_withdrawal)));
        assert!(output.contains("Inflation-adjusted monthly withdrawal"));
    }
}
