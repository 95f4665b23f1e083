//! TOML configuration for the demo binaries.
//!
//! Every section is optional; the defaults reproduce the stock demonstrations.
//!
//! ```toml
//! log_level = "debug"
//!
//! [linked_list]
//! values = [10, 20, 30]
//!
//! [banking]
//! transfer_amount = 250.0
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "CS_FUNDAMENTALS_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Milestone 1: Error types with context
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Milestone 2: Typed sections with defaults
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub log_level: String,
    pub linked_list: SequenceDemo,
    pub queue: SequenceDemo,
    pub users: UsersDemo,
    pub banking: BankingDemo,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            linked_list: SequenceDemo {
                values: vec![10, 20],
            },
            queue: SequenceDemo { values: vec![1, 2] },
            users: UsersDemo::default(),
            banking: BankingDemo::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceDemo {
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsersDemo {
    pub user_name: String,
    pub user_age: u32,
    pub updated_age: u32,
    pub admin_name: String,
    pub admin_age: u32,
    pub admin_privileges: Vec<String>,
}

impl Default for UsersDemo {
    fn default() -> Self {
        Self {
            user_name: "Alex".to_string(),
            user_age: 25,
            updated_age: 26,
            admin_name: "Sam".to_string(),
            admin_age: 30,
            admin_privileges: vec!["manage-users".to_string(), "edit-content".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BankingDemo {
    pub savings_holder: String,
    pub savings_number: String,
    pub savings_initial_deposit: f64,
    pub interest_rate: f64,
    pub checking_holder: String,
    pub checking_number: String,
    pub checking_initial_deposit: f64,
    pub overdraft_limit: f64,
    pub deposit: f64,
    pub check_payee: String,
    pub check_amount: f64,
    pub transfer_amount: f64,
    pub withdrawal_attempts: u32,
    pub withdrawal_amount: f64,
    pub overdraft_withdrawal: f64,
}

impl Default for BankingDemo {
    fn default() -> Self {
        Self {
            savings_holder: "Alice Johnson".to_string(),
            savings_number: "1234567890".to_string(),
            savings_initial_deposit: 1000.0,
            interest_rate: 2.5,
            checking_holder: "Bob Smith".to_string(),
            checking_number: "0987654321".to_string(),
            checking_initial_deposit: 500.0,
            overdraft_limit: 200.0,
            deposit: 500.0,
            check_payee: "Electric Company".to_string(),
            check_amount: 150.0,
            transfer_amount: 300.0,
            withdrawal_attempts: 7,
            withdrawal_amount: 50.0,
            overdraft_withdrawal: 600.0,
        }
    }
}

// =============================================================================
// Milestone 3: Loading and validation
// =============================================================================

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading demo config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid_value(
                "log_level",
                &self.log_level,
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }
}

/// First CLI argument, falling back to `CS_FUNDAMENTALS_CONFIG`.
pub fn config_path<I>(mut args: I) -> Option<PathBuf>
where
    I: Iterator<Item = String>,
{
    args.next()
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

/// Config for a demo binary, located from its command line or environment.
pub fn load_demo_config() -> Result<DemoConfig, ConfigError> {
    let path = config_path(std::env::args().skip(1));
    DemoConfig::load(path.as_deref())
}
