//! Operations that work on any account variant.

use super::{Account, BankError};
use std::fmt;

/// Moves `amount` from one account to another. Nothing changes if the
/// withdrawal side fails.
pub fn transfer(from: &mut Account, to: &mut Account, amount: f64) -> Result<(), BankError> {
    tracing::info!(from = from.holder(), to = to.holder(), amount, "transfer");
    from.withdraw(amount)?;
    to.deposit(amount)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeeOutcome {
    Waived,
    Charged(f64),
    Failed { fee: f64, error: BankError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceReport {
    pub holder: String,
    pub fee: FeeOutcome,
    pub interest: Option<f64>,
    pub summary: String,
}

impl fmt::Display for MaintenanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Monthly maintenance for {} ---", self.holder)?;
        match &self.fee {
            FeeOutcome::Waived => writeln!(f, "Monthly fee waived")?,
            FeeOutcome::Charged(fee) => writeln!(f, "Monthly fee charged: ${fee:.2}")?,
            FeeOutcome::Failed { fee, error } => {
                writeln!(f, "Monthly fee of ${fee:.2} not charged: {error}")?
            }
        }
        if let Some(interest) = self.interest {
            writeln!(f, "Interest applied: ${interest:.2}")?;
        }
        write!(f, "{}", self.summary)
    }
}

/// Charges the monthly fee and, for savings, credits interest and starts a
/// new withdrawal month. A fee that can't be withdrawn is reported, not
/// propagated.
pub fn process_monthly_maintenance(account: &mut Account) -> MaintenanceReport {
    let fee = account.monthly_fee();
    let fee = if fee > 0.0 {
        match account.withdraw(fee) {
            Ok(_) => FeeOutcome::Charged(fee),
            Err(error) => {
                tracing::warn!(holder = account.holder(), fee, %error, "monthly fee not charged");
                FeeOutcome::Failed { fee, error }
            }
        }
    } else {
        FeeOutcome::Waived
    };

    let interest = if account.kind().is_savings() {
        let interest = match account.apply_interest() {
            Ok(interest) => Some(interest),
            Err(error) => {
                tracing::warn!(holder = account.holder(), %error, "interest not applied");
                None
            }
        };
        account.reset_monthly_limit();
        interest
    } else {
        None
    };

    MaintenanceReport {
        holder: account.holder().to_string(),
        fee,
        interest,
        summary: account.summary(),
    }
}
