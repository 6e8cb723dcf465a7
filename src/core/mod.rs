//! Financial formulas and the application configuration

pub mod budget;
mod compounding;
pub mod config;
pub mod currency;
pub mod investment;
pub mod loan;
pub mod log;
pub mod retirement;
pub mod savings;

// Re-export main types for cleaner imports
pub use budget::{BudgetCategory, BudgetInput, BudgetResult, allocate_budget};
pub use currency::{ConversionError, CurrencyInput, CurrencyResult, convert_currency};
pub use investment::{InvestmentInput, InvestmentResult, calculate_investment};
pub use loan::{LoanInput, LoanResult, MonthlyBreakdown, calculate_loan};
pub use retirement::{RetirementInput, RetirementResult, calculate_retirement};
pub use savings::{SavingsInput, SavingsResult, calculate_savings};
