use super::transaction::{Transaction, TransactionKind};
use super::BankError;

pub const SAVINGS_MAX_WITHDRAWALS: u32 = 6;

const BASIC_MONTHLY_FEE: f64 = 5.0;
const SAVINGS_MONTHLY_FEE: f64 = 3.0;
const SAVINGS_FEE_WAIVER_BALANCE: f64 = 500.0;
const CHECKING_MONTHLY_FEE: f64 = 10.0;
const CHECKING_FEE_WAIVER_BALANCE: f64 = 1000.0;

// =============================================================================
// Milestone 1: Account variants as a tagged union
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Basic,
    Savings {
        /// Annual rate in percent, e.g. `2.5`.
        interest_rate: f64,
        withdrawals_this_month: u32,
        max_withdrawals: u32,
    },
    Checking {
        overdraft_limit: f64,
        has_debit_card: bool,
    },
}

impl AccountKind {
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Basic => "basic",
            AccountKind::Savings { .. } => "savings",
            AccountKind::Checking { .. } => "checking",
        }
    }

    pub fn is_savings(&self) -> bool {
        matches!(self, AccountKind::Savings { .. })
    }
}

// =============================================================================
// Milestone 2: Encapsulated state
// =============================================================================

#[derive(Debug, Clone)]
pub struct Account {
    holder: String,
    account_number: String,
    balance: f64,
    history: Vec<Transaction>,
    kind: AccountKind,
}

impl Account {
    pub fn basic(
        holder: impl Into<String>,
        account_number: impl Into<String>,
        initial_deposit: f64,
    ) -> Result<Self, BankError> {
        Self::open(holder.into(), account_number.into(), initial_deposit, AccountKind::Basic)
    }

    pub fn savings(
        holder: impl Into<String>,
        account_number: impl Into<String>,
        initial_deposit: f64,
        interest_rate: f64,
    ) -> Result<Self, BankError> {
        if !interest_rate.is_finite() || interest_rate < 0.0 {
            return Err(BankError::InvalidRate {
                rate: interest_rate,
            });
        }
        let kind = AccountKind::Savings {
            interest_rate,
            withdrawals_this_month: 0,
            max_withdrawals: SAVINGS_MAX_WITHDRAWALS,
        };
        Self::open(holder.into(), account_number.into(), initial_deposit, kind)
    }

    pub fn checking(
        holder: impl Into<String>,
        account_number: impl Into<String>,
        initial_deposit: f64,
        overdraft_limit: f64,
    ) -> Result<Self, BankError> {
        if !overdraft_limit.is_finite() || overdraft_limit < 0.0 {
            return Err(BankError::invalid_amount("overdraft limit", overdraft_limit));
        }
        let kind = AccountKind::Checking {
            overdraft_limit,
            has_debit_card: true,
        };
        Self::open(holder.into(), account_number.into(), initial_deposit, kind)
    }

    fn open(
        holder: String,
        account_number: String,
        initial_deposit: f64,
        kind: AccountKind,
    ) -> Result<Self, BankError> {
        if account_number.len() < 4 || !account_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BankError::InvalidAccountNumber {
                number: account_number,
            });
        }
        if !initial_deposit.is_finite() || initial_deposit < 0.0 {
            return Err(BankError::invalid_amount("initial deposit", initial_deposit));
        }

        let mut account = Self {
            holder,
            account_number,
            balance: initial_deposit,
            history: Vec::new(),
            kind,
        };
        account.record(TransactionKind::InitialDeposit, initial_deposit);
        tracing::info!(
            holder = %account.holder,
            kind = account.kind.name(),
            initial_deposit,
            "opened account"
        );
        Ok(account)
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Only the last four digits are ever exposed.
    pub fn masked_number(&self) -> String {
        let tail = &self.account_number[self.account_number.len() - 4..];
        format!("****{tail}")
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.history
    }

    pub fn statement_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.history)
    }

    pub fn summary(&self) -> String {
        format!(
            "Account: {} | Holder: {} | Balance: ${:.2}",
            self.masked_number(),
            self.holder,
            self.balance
        )
    }

    fn record(&mut self, kind: TransactionKind, amount: f64) {
        self.history.push(Transaction::new(kind, amount, self.balance));
    }

    // =========================================================================
    // Milestone 3: Per-variant behaviour
    // =========================================================================

    pub fn deposit(&mut self, amount: f64) -> Result<f64, BankError> {
        ensure_positive("deposit", amount)?;

        self.balance += amount;
        self.record(TransactionKind::Deposit, amount);
        tracing::info!(holder = %self.holder, amount, balance = self.balance, "deposit");
        Ok(self.balance)
    }

    /// Balance plus any overdraft the account may still draw on.
    pub fn available_funds(&self) -> f64 {
        match self.kind {
            AccountKind::Checking {
                overdraft_limit, ..
            } => self.balance + overdraft_limit,
            _ => self.balance,
        }
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<f64, BankError> {
        if let AccountKind::Savings {
            withdrawals_this_month,
            max_withdrawals,
            ..
        } = self.kind
        {
            if withdrawals_this_month >= max_withdrawals {
                tracing::warn!(holder = %self.holder, limit = max_withdrawals, "withdrawal limit reached");
                return Err(BankError::WithdrawalLimitReached {
                    limit: max_withdrawals,
                });
            }
        }
        ensure_positive("withdrawal", amount)?;

        let available = self.available_funds();
        if amount > available {
            tracing::warn!(holder = %self.holder, amount, available, "withdrawal rejected");
            return Err(match self.kind {
                AccountKind::Checking { .. } => BankError::ExceedsOverdraft {
                    requested: amount,
                    available,
                },
                _ => BankError::InsufficientFunds {
                    requested: amount,
                    available,
                },
            });
        }

        if matches!(self.kind, AccountKind::Checking { .. }) && amount > self.balance {
            let overdraft_used = amount - self.balance.max(0.0);
            tracing::info!(holder = %self.holder, overdraft_used, "using overdraft protection");
        }

        self.balance -= amount;
        self.record(TransactionKind::Withdrawal, amount);
        if let AccountKind::Savings {
            withdrawals_this_month,
            ..
        } = &mut self.kind
        {
            *withdrawals_this_month += 1;
        }
        tracing::info!(holder = %self.holder, amount, balance = self.balance, "withdrawal");
        Ok(self.balance)
    }

    pub fn write_check(&mut self, payee: &str, amount: f64) -> Result<f64, BankError> {
        if !matches!(self.kind, AccountKind::Checking { .. }) {
            return Err(BankError::unsupported("write check", &self.kind));
        }
        tracing::info!(holder = %self.holder, payee, amount, "writing check");
        self.withdraw(amount)
    }

    pub fn monthly_fee(&self) -> f64 {
        match self.kind {
            AccountKind::Basic => BASIC_MONTHLY_FEE,
            AccountKind::Savings { .. } if self.balance > SAVINGS_FEE_WAIVER_BALANCE => 0.0,
            AccountKind::Savings { .. } => SAVINGS_MONTHLY_FEE,
            AccountKind::Checking { .. } if self.balance > CHECKING_FEE_WAIVER_BALANCE => 0.0,
            AccountKind::Checking { .. } => CHECKING_MONTHLY_FEE,
        }
    }

    /// Deposits one month of interest and returns the amount credited.
    pub fn apply_interest(&mut self) -> Result<f64, BankError> {
        let AccountKind::Savings { interest_rate, .. } = self.kind else {
            return Err(BankError::unsupported("apply interest", &self.kind));
        };

        let interest = self.balance * interest_rate / 100.0 / 12.0;
        if interest > 0.0 {
            self.deposit(interest)?;
        }
        tracing::info!(holder = %self.holder, interest, "interest applied");
        Ok(interest)
    }

    pub fn reset_monthly_limit(&mut self) {
        if let AccountKind::Savings {
            withdrawals_this_month,
            ..
        } = &mut self.kind
        {
            *withdrawals_this_month = 0;
        }
    }
}

fn ensure_positive(operation: &'static str, amount: f64) -> Result<(), BankError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BankError::invalid_amount(operation, amount));
    }
    Ok(())
}
