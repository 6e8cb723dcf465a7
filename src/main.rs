use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use finz::cli::{
    OutputFormat, budget::BudgetArgs, currency::CurrencyArgs, invest::InvestArgs, loan::LoanArgs,
    retirement::RetirementArgs, savings::SavingsArgs,
};
use finz::core::log::init_logging;

#[derive(Parser)]
#[command(version, about = "Finz - Financial Calculator CLI")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = CliOutputFormat::Table)]
    format: CliOutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    #[command(flatten)]
    Calculate(CalculatorCommands),
}

#[derive(Subcommand)]
enum CalculatorCommands {
    /// Calculate investment growth with taxes and inflation
    Invest(InvestFlags),
    /// Calculate loan or mortgage payments
    Loan(LoanFlags),
    /// Calculate savings with regular deposits
    Savings(SavingsFlags),
    /// Calculate retirement savings and withdrawals
    Retirement(RetirementFlags),
    /// Convert between currencies
    Currency(CurrencyFlags),
    /// Allocate budget based on percentages
    Budget(BudgetFlags),
}

#[derive(Args)]
struct InvestFlags {
    /// Initial investment amount
    #[arg(long)]
    initial: Option<f64>,
    /// Annual yield in percent (e.g., 7)
    #[arg(long = "yield")]
    annual_yield: Option<f64>,
    /// Tax rate on gains in percent
    #[arg(long)]
    tax: Option<f64>,
    /// Annual inflation rate in percent
    #[arg(long)]
    inflation: Option<f64>,
    /// Investment duration in years
    #[arg(long)]
    years: Option<i32>,
}

#[derive(Args)]
struct LoanFlags {
    /// Loan amount
    #[arg(long)]
    amount: Option<f64>,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,
    /// Loan term in years
    #[arg(long)]
    years: Option<i32>,
    /// Show monthly payment breakdown
    #[arg(long)]
    monthly: Option<bool>,
}

#[derive(Args)]
struct SavingsFlags {
    /// Initial deposit amount
    #[arg(long)]
    initial: Option<f64>,
    /// Monthly deposit amount
    #[arg(long)]
    monthly: Option<f64>,
    /// Annual yield in percent
    #[arg(long = "yield")]
    annual_yield: Option<f64>,
    /// Annual inflation rate in percent
    #[arg(long)]
    inflation: Option<f64>,
    /// Savings duration in years
    #[arg(long)]
    years: Option<i32>,
}

#[derive(Args)]
struct RetirementFlags {
    /// Current age
    #[arg(long)]
    age: Option<i32>,
    /// Retirement age
    #[arg(long)]
    retire_age: Option<i32>,
    /// Current retirement savings
    #[arg(long)]
    savings: Option<f64>,
    /// Monthly contribution
    #[arg(long)]
    monthly: Option<f64>,
    /// Annual withdrawal rate in percent
    #[arg(long)]
    withdrawal: Option<f64>,
    /// Annual investment yield in percent
    #[arg(long = "yield")]
    annual_yield: Option<f64>,
    /// Annual inflation rate in percent
    #[arg(long)]
    inflation: Option<f64>,
}

#[derive(Args)]
struct CurrencyFlags {
    /// Amount to convert
    #[arg(long)]
    amount: Option<f64>,
    /// Source currency code (e.g., EUR, USD)
    #[arg(long)]
    from: Option<String>,
    /// Target currency code (e.g., EUR, USD)
    #[arg(long)]
    to: Option<String>,
}

#[derive(Args)]
struct BudgetFlags {
    /// Monthly income
    #[arg(long)]
    income: Option<f64>,
    /// Housing percentage
    #[arg(long)]
    housing: Option<f64>,
    /// Food percentage
    #[arg(long)]
    food: Option<f64>,
    /// Transportation percentage
    #[arg(long)]
    transport: Option<f64>,
    /// Utilities percentage
    #[arg(long)]
    utilities: Option<f64>,
    /// Healthcare percentage
    #[arg(long)]
    healthcare: Option<f64>,
    /// Debt repayment percentage
    #[arg(long)]
    debt: Option<f64>,
    /// Savings percentage
    #[arg(long)]
    savings: Option<f64>,
    /// Discretionary spending percentage
    #[arg(long)]
    discretionary: Option<f64>,
}

impl From<CalculatorCommands> for finz::AppCommand {
    fn from(cmd: CalculatorCommands) -> finz::AppCommand {
        match cmd {
            CalculatorCommands::Invest(f) => finz::AppCommand::Invest(InvestArgs {
                principal: f.initial,
                annual_yield: f.annual_yield,
                tax_rate: f.tax,
                inflation: f.inflation,
                years: f.years,
            }),
            CalculatorCommands::Loan(f) => finz::AppCommand::Loan(LoanArgs {
                amount: f.amount,
                rate: f.rate,
                years: f.years,
                monthly: f.monthly,
            }),
            CalculatorCommands::Savings(f) => finz::AppCommand::Savings(SavingsArgs {
                initial: f.initial,
                monthly: f.monthly,
                annual_yield: f.annual_yield,
                inflation: f.inflation,
                years: f.years,
            }),
            CalculatorCommands::Retirement(f) => finz::AppCommand::Retirement(RetirementArgs {
                current_age: f.age,
                retirement_age: f.retire_age,
                current_savings: f.savings,
                monthly_contribution: f.monthly,
                withdrawal_rate: f.withdrawal,
                annual_yield: f.annual_yield,
                inflation: f.inflation,
            }),
            CalculatorCommands::Currency(f) => finz::AppCommand::Currency(CurrencyArgs {
                amount: f.amount,
                from: f.from,
                to: f.to,
            }),
            CalculatorCommands::Budget(f) => finz::AppCommand::Budget(BudgetArgs {
                income: f.income,
                housing: f.housing,
                food: f.food,
                transport: f.transport,
                utilities: f.utilities,
                healthcare: f.healthcare,
                debt: f.debt,
                savings: f.savings,
                discretionary: f.discretionary,
            }),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => finz::cli::setup::setup(),
        Some(Commands::Calculate(cmd)) => {
            finz::run_command(cmd.into(), cli.config_path.as_deref(), cli.format.into())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
