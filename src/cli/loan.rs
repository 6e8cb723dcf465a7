use super::ui::{self, OutputFormat};
use crate::core::loan::{LoanInput, LoanResult, SCHEDULE_MONTHS, calculate_loan};
use anyhow::Result;
use comfy_table::Cell;

/// Flags of the `loan` command. Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct LoanArgs {
    pub amount: Option<f64>,
    pub rate: Option<f64>,
    pub years: Option<i32>,
    pub monthly: Option<bool>,
}

impl LoanArgs {
    pub fn resolve(&self, base: &LoanInput) -> LoanInput {
        LoanInput {
            principal: self.amount.unwrap_or(base.principal),
            annual_rate: self.rate.unwrap_or(base.annual_rate),
            years: self.years.unwrap_or(base.years),
            include_monthly_schedule: self.monthly.unwrap_or(base.include_monthly_schedule),
        }
    }
}

impl LoanResult {
    pub fn display_as_table(&self, symbol: &str) -> String {
        let summary = ui::summary_table(vec![
            ("Loan amount", ui::money_cell(symbol, self.principal)),
            ("Monthly payment", ui::money_cell(symbol, self.monthly_payment)),
            ("Total paid", ui::money_cell(symbol, self.total_paid)),
            ("Total interest", ui::money_cell(symbol, self.total_interest)),
            (
                "Loan term",
                ui::value_cell(format!(
                    "{} years ({} payments)",
                    self.years, self.number_of_payments
                )),
            ),
        ]);

        let mut output = format!(
            "{}\n\n{summary}",
            ui::style_text("Loan Repayment", ui::StyleType::Title)
        );

        if self.monthly_schedule.is_empty() {
            return output;
        }

        let mut schedule = ui::new_styled_table();
        schedule.set_header(vec![
            ui::header_cell("Month"),
            ui::header_cell("Payment"),
            ui::header_cell("Principal"),
            ui::header_cell("Interest"),
            ui::header_cell("Remaining"),
        ]);
        for month in &self.monthly_schedule {
            schedule.add_row(vec![
                Cell::new(month.month),
                ui::money_cell(symbol, month.payment),
                ui::money_cell(symbol, month.principal_portion),
                ui::money_cell(symbol, month.interest_portion),
                ui::money_cell(symbol, month.remaining_balance),
            ]);
        }

        output.push_str(&format!(
            "\n\n{}\n{schedule}",
            ui::style_text("Monthly Payment Breakdown", ui::StyleType::TotalLabel)
        ));
        if self.number_of_payments > i64::from(SCHEDULE_MONTHS) {
            output.push_str(&format!("\n{}", ui::style_text("...", ui::StyleType::Subtle)));
        }
        output
    }
}

pub fn output(args: &LoanArgs, defaults: &LoanInput, symbol: &str, format: OutputFormat) -> Result<String> {
    let input = args.resolve(defaults);
    let result = calculate_loan(&input);
    ui::render(format, &result, |r| r.display_as_table(symbol))
}
