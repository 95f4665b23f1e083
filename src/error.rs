use crate::banking::BankError;
use crate::config::ConfigError;
use crate::users::UserError;
use thiserror::Error;

/// Top-level error for the demo binaries.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error("Failed to render account statement: {0}")]
    Statement(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
