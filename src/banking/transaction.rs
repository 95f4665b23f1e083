use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    InitialDeposit,
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::InitialDeposit => "Initial Deposit",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        };
        f.write_str(label)
    }
}

/// A single history entry; `balance` is the balance right after it applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub balance: f64,
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, amount: f64, balance: f64) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
            balance,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${:.2} on {} (Balance: ${:.2})",
            self.kind,
            self.amount,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.balance
        )
    }
}
