//! Bank accounts with private balances and per-variant rules.
//!
//! The account variants (basic, savings, checking) live in one
//! [`AccountKind`] enum; behaviour that differs per variant is a `match`
//! instead of an overridden method.

mod account;
pub mod manager;
mod transaction;

pub use account::{Account, AccountKind, SAVINGS_MAX_WITHDRAWALS};
pub use manager::{process_monthly_maintenance, transfer, FeeOutcome, MaintenanceReport};
pub use transaction::{Transaction, TransactionKind};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankError {
    #[error("Invalid {operation} amount {amount}: must be a positive, finite value")]
    InvalidAmount { operation: &'static str, amount: f64 },

    #[error("Invalid interest rate {rate}: must be a non-negative, finite percentage")]
    InvalidRate { rate: f64 },

    #[error("Invalid account number '{number}': expected at least 4 digits")]
    InvalidAccountNumber { number: String },

    #[error("Insufficient funds: requested ${requested:.2}, available ${available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Amount ${requested:.2} exceeds available funds including overdraft (${available:.2})")]
    ExceedsOverdraft { requested: f64, available: f64 },

    #[error("Withdrawal limit reached ({limit} per month)")]
    WithdrawalLimitReached { limit: u32 },

    #[error("Cannot {operation} on a {kind} account")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },
}

impl BankError {
    pub fn invalid_amount(operation: &'static str, amount: f64) -> Self {
        Self::InvalidAmount { operation, amount }
    }

    pub fn unsupported(operation: &'static str, kind: &AccountKind) -> Self {
        Self::Unsupported {
            operation,
            kind: kind.name(),
        }
    }
}
