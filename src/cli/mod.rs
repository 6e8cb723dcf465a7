//! Command handlers: resolve inputs, run a calculator and print the result

pub mod budget;
pub mod currency;
pub mod invest;
pub mod loan;
pub mod retirement;
pub mod savings;
pub mod setup;
pub mod ui;

pub use ui::OutputFormat;
