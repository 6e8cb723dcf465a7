//! Currency conversion against a fixed table of quotes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Quotes keyed by source code, then target code. Cross rates are quoted
/// independently and are not inverses of each other.
type RateTable = HashMap<&'static str, HashMap<&'static str, f64>>;

static RATES: LazyLock<RateTable> = LazyLock::new(|| {
    let quotes: [(&str, [(&str, f64); 3]); 4] = [
        ("EUR", [("USD", 1.09), ("GBP", 0.85), ("JPY", 160.0)]),
        ("USD", [("EUR", 0.92), ("GBP", 0.78), ("JPY", 147.0)]),
        ("GBP", [("EUR", 1.18), ("USD", 1.28), ("JPY", 188.0)]),
        ("JPY", [("EUR", 0.00625), ("USD", 0.0068), ("GBP", 0.0053)]),
    ];
    quotes
        .into_iter()
        .map(|(from, targets)| (from, targets.into_iter().collect()))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unsupported source currency: {0}")]
    UnsupportedSourceCurrency(String),

    #[error("unsupported target currency: {0}")]
    UnsupportedTargetCurrency(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyInput {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl Default for CurrencyInput {
    fn default() -> Self {
        CurrencyInput {
            amount: 100.0,
            from: "EUR".to_string(),
            to: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted_amount: f64,
    pub exchange_rate: f64,
}

/// Looks up the quote for converting `from` into `to`. Codes must already be
/// upper case.
fn lookup_rate(from: &str, to: &str) -> Result<f64, ConversionError> {
    let targets = RATES
        .get(from)
        .ok_or_else(|| ConversionError::UnsupportedSourceCurrency(from.to_string()))?;
    targets
        .get(to)
        .copied()
        .ok_or_else(|| ConversionError::UnsupportedTargetCurrency(to.to_string()))
}

/// Converts `amount` between two currency codes, compared case-insensitively.
///
/// Identical codes convert at 1.0 without consulting the table, so this
/// succeeds even for codes the table does not know.
pub fn convert_currency(input: &CurrencyInput) -> Result<CurrencyResult, ConversionError> {
    let from = input.from.to_uppercase();
    let to = input.to.to_uppercase();

    let exchange_rate = if from == to {
        debug!("No currency conversion needed ({from} -> {to})");
        1.0
    } else {
        let rate = lookup_rate(&from, &to)?;
        debug!("Converting {} from {from} to {to} at rate {rate}", input.amount);
        rate
    };

    Ok(CurrencyResult {
        amount: input.amount,
        converted_amount: input.amount * exchange_rate,
        from,
        to,
        exchange_rate,
    })
}
