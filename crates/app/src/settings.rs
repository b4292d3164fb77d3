//! Application settings, read from `settings.toml` plus `SALDO_*` environment
//! overrides.
//!
//! The `[balance]` section mirrors the rule configuration: special type ids,
//! the override table, and the designated checking/savings account ids used
//! by the transfer and credit-card settlement rules. Anything left unset
//! falls back to the engine defaults.

use std::collections::BTreeSet;

use config::{Config, ConfigError, Environment, File};
use engine::{DesignatedAccounts, RuleConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Database {
    /// Sqlite file path; unset means an in-memory database.
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub check_type_id: Option<i32>,
    pub savings_type_id: Option<i32>,
    pub credit_card_type_id: Option<i32>,
    pub income_type_id: Option<i32>,
    pub checking_account_id: Option<i32>,
    pub savings_account_id: Option<i32>,
    /// Map of account-type id to eligible account ids, e.g. `9 = [42]`.
    /// Keys are strings because of the config format.
    pub overrides: std::collections::HashMap<String, Vec<i32>>,
}

impl Balance {
    /// Build the engine rule configuration, keeping the engine defaults for
    /// any field this section leaves unset.
    pub fn rule_config(&self) -> RuleConfig {
        let defaults = RuleConfig::default();
        let overrides = if self.overrides.is_empty() {
            defaults.overrides
        } else {
            self.overrides
                .iter()
                .filter_map(|(type_id, accounts)| {
                    let type_id = type_id.parse::<i32>().ok()?;
                    Some((type_id, accounts.iter().copied().collect::<BTreeSet<_>>()))
                })
                .collect()
        };
        RuleConfig {
            check_type_id: self.check_type_id.or(defaults.check_type_id),
            savings_type_id: self.savings_type_id.or(defaults.savings_type_id),
            credit_card_type_id: self.credit_card_type_id.or(defaults.credit_card_type_id),
            income_type_id: self.income_type_id.or(defaults.income_type_id),
            overrides,
            designated: DesignatedAccounts {
                checking: self.checking_account_id.or(defaults.designated.checking),
                savings: self.savings_account_id.or(defaults.designated.savings),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub database: Database,
    pub balance: Balance,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("SALDO").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
