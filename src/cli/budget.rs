use super::ui::{self, OutputFormat};
use crate::core::budget::{BudgetInput, BudgetResult, allocate_budget};
use anyhow::Result;
use comfy_table::{Attribute, Cell};

/// Flags of the `budget` command. Unset flags fall back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct BudgetArgs {
    pub income: Option<f64>,
    pub housing: Option<f64>,
    pub food: Option<f64>,
    pub transport: Option<f64>,
    pub utilities: Option<f64>,
    pub healthcare: Option<f64>,
    pub debt: Option<f64>,
    pub savings: Option<f64>,
    pub discretionary: Option<f64>,
}

impl BudgetArgs {
    pub fn resolve(&self, base: &BudgetInput) -> BudgetInput {
        BudgetInput {
            income: self.income.unwrap_or(base.income),
            housing: self.housing.unwrap_or(base.housing),
            food: self.food.unwrap_or(base.food),
            transport: self.transport.unwrap_or(base.transport),
            utilities: self.utilities.unwrap_or(base.utilities),
            healthcare: self.healthcare.unwrap_or(base.healthcare),
            debt: self.debt.unwrap_or(base.debt),
            savings: self.savings.unwrap_or(base.savings),
            discretionary: self.discretionary.unwrap_or(base.discretionary),
        }
    }
}

impl BudgetResult {
    pub fn display_as_table(&self, symbol: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Category"),
            ui::header_cell("Amount"),
            ui::header_cell("Share"),
        ]);

        for category in &self.categories {
            table.add_row(vec![
                Cell::new(&category.name),
                ui::money_cell(symbol, category.amount),
                ui::value_cell(format!("{:.1}%", category.percentage)),
            ]);
        }

        table.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            ui::total_cell(&ui::money(symbol, self.total_amount)),
            ui::total_cell(&format!("{:.1}%", self.total_percentage)),
        ]);

        let mut output = String::new();
        if let Some(warning) = &self.warning {
            output.push_str(&format!(
                "{}\n\n",
                ui::style_text(warning, ui::StyleType::Warning)
            ));
        }
        output.push_str(&format!(
            "Monthly Income: {}\n\n{table}",
            ui::style_text(&ui::money(symbol, self.income), ui::StyleType::TotalLabel)
        ));
        output
    }
}

pub fn output(args: &BudgetArgs, defaults: &BudgetInput, symbol: &str, format: OutputFormat) -> Result<String> {
    let input = args.resolve(defaults);
    let result = allocate_budget(&input);
    ui::render(format, &result, |r| r.display_as_table(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::budget::BUDGET_WARNING;

    #[test]
    fn test_default_budget_has_no_warning() {
        let result = allocate_budget(&BudgetArgs::default().resolve(&BudgetInput::default()));
        let output = result.display_as_table("€");

        assert!(!output.contains(BUDGET_WARNING));
        assert!(output.contains("Monthly Income"));
        assert!(output.contains("€3000.00"));
        assert!(output.contains("Debt Repayment"));
        assert!(output.contains("€900.00"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_overallocation_prints_warning_first() {
        let args = BudgetArgs {
            housing: Some(50.0),
            ..Default::default()
        };
        let output = allocate_budget(&args.resolve(&BudgetInput::default())).display_as_table("€");

        let warning_at = output.find(BUDGET_WARNING).expect("warning missing");
        let income_at = output.find("Monthly Income").expect("income missing");
        assert!(warning_at < income_at);
        assert!(output.contains("120.0%"));
    }
}
