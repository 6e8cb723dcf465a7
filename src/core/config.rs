use crate::core::budget::BudgetInput;
use crate::core::currency::CurrencyInput;
use crate::core::investment::InvestmentInput;
use crate::core::loan::LoanInput;
use crate::core::retirement::RetirementInput;
use crate::core::savings::SavingsInput;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::debug;

/// Default inputs for each calculator, used for any flag not given on the
/// command line.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CommandDefaults {
    pub invest: InvestmentInput,
    pub loan: LoanInput,
    pub savings: SavingsInput,
    pub retirement: RetirementInput,
    pub currency: CurrencyInput,
    pub budget: BudgetInput,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix used when rendering monetary amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub defaults: CommandDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency_symbol: default_currency_symbol(),
            defaults: CommandDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "finz", "finz")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config: {config:#?}");
        Ok(config)
    }
}
