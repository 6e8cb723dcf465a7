pub mod cli;
pub mod core;

use crate::cli::OutputFormat;
use crate::cli::budget::BudgetArgs;
use crate::cli::currency::CurrencyArgs;
use crate::cli::invest::InvestArgs;
use crate::cli::loan::LoanArgs;
use crate::cli::retirement::RetirementArgs;
use crate::cli::savings::SavingsArgs;
use crate::core::config::AppConfig;
use anyhow::Result;

/// A calculator invocation with its unresolved flags.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Invest(InvestArgs),
    Loan(LoanArgs),
    Savings(SavingsArgs),
    Retirement(RetirementArgs),
    Currency(CurrencyArgs),
    Budget(BudgetArgs),
}

/// Loads the configuration and runs a single command, printing its output.
pub fn run_command(command: AppCommand, config_path: Option<&str>, format: OutputFormat) -> Result<()> {
    println!("{}", command_output(command, config_path, format)?);
    Ok(())
}

/// Loads the configuration and returns the rendered output of a single command.
///
/// With `config_path` unset the default location is used, and a missing file
/// there means built-in defaults.
pub fn command_output(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let defaults = &config.defaults;
    let symbol = config.currency_symbol.as_str();
    match command {
        AppCommand::Invest(args) => cli::invest::output(&args, &defaults.invest, symbol, format),
        AppCommand::Loan(args) => cli::loan::output(&args, &defaults.loan, symbol, format),
        AppCommand::Savings(args) => cli::savings::output(&args, &defaults.savings, symbol, format),
        AppCommand::Retirement(args) => {
            cli::retirement::output(&args, &defaults.retirement, symbol, format)
        }
        AppCommand::Currency(args) => cli::currency::output(&args, &defaults.currency, format),
        AppCommand::Budget(args) => cli::budget::output(&args, &defaults.budget, symbol, format),
    }
}
