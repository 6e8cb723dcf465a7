//! Percentage-based split of an income across fixed spending categories.

use serde::{Deserialize, Serialize};

pub const BUDGET_WARNING: &str = "Warning: Your budget percentages total does not equal 100%";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BudgetInput {
    pub income: f64,
    pub housing: f64,
    pub food: f64,
    pub transport: f64,
    pub utilities: f64,
    pub healthcare: f64,
    pub debt: f64,
    pub savings: f64,
    pub discretionary: f64,
}

impl Default for BudgetInput {
    fn default() -> Self {
        BudgetInput {
            income: 3000.0,
            housing: 30.0,
            food: 15.0,
            transport: 10.0,
            utilities: 5.0,
            healthcare: 5.0,
            debt: 10.0,
            savings: 15.0,
            discretionary: 10.0,
        }
    }
}

impl BudgetInput {
    /// Category names paired with their percentages, in display order.
    fn categories(&self) -> [(&'static str, f64); 8] {
        [
            ("Housing", self.housing),
            ("Food", self.food),
            ("Transportation", self.transport),
            ("Utilities", self.utilities),
            ("Healthcare", self.healthcare),
            ("Debt Repayment", self.debt),
            ("Savings", self.savings),
            ("Discretionary", self.discretionary),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub income: f64,
    pub categories: Vec<BudgetCategory>,
    pub total_amount: f64,
    pub total_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Allocates `income` across the eight categories.
///
/// The warning is attached whenever the percentages do not sum to exactly 100;
/// there is no tolerance. Negative or oversized inputs are carried through.
pub fn allocate_budget(input: &BudgetInput) -> BudgetResult {
    let total_percentage = input.housing
        + input.food
        + input.transport
        + input.utilities
        + input.healthcare
        + input.debt
        + input.savings
        + input.discretionary;

    let warning = (total_percentage != 100.0).then(|| BUDGET_WARNING.to_string());

    let categories = input
        .categories()
        .into_iter()
        .map(|(name, percentage)| BudgetCategory {
            name: name.to_string(),
            amount: input.income * percentage / 100.0,
            percentage,
        })
        .collect();

    BudgetResult {
        income: input.income,
        categories,
        total_amount: input.income * total_percentage / 100.0,
        total_percentage,
        warning,
    }
}
