use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{currency::CurrencyTable, errors::LedgerError};

/// Environment variable naming the JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "DAILY_BUDGET_CONFIG";

const DEFAULT_DAILY_LIMIT: f64 = 3000.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub calorie_limit: f64,
    pub cash_limit: f64,
    pub currencies: CurrencyTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calorie_limit: DEFAULT_DAILY_LIMIT,
            cash_limit: DEFAULT_DAILY_LIMIT,
            currencies: CurrencyTable::default(),
        }
    }
}

pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Uses the path from `DAILY_BUDGET_CONFIG`, if set.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(Config::default());
        };
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
