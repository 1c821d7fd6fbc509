use super::TransactionKind;

use crate::models::Account;
use crate::Money;
use crate::Result;

use chrono::{Local, NaiveDateTime};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Invalid amount: transaction amount must be positive, got {0}")]
    InvalidAmount(Money),
}

/// Transaction represents a requested change to an account.
///
/// It is consumed once by `Client::execute`; if it succeeds its data is captured
/// into the account's `History`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    created_at: NaiveDateTime,
}

impl Transaction {
    /// Creates a transaction stamped with the current local time
    pub fn new(kind: TransactionKind, amount: Money) -> Result<Self> {
        return Self::with_timestamp(kind, amount, Local::now().naive_local());
    }

    pub fn with_timestamp(
        kind: TransactionKind,
        amount: Money,
        created_at: NaiveDateTime,
    ) -> Result<Self> {
        if !amount.is_positive() {
            Err(TransactionError::InvalidAmount(amount))?
        }

        return Ok(Self {
            kind,
            amount,
            created_at,
        });
    }

    pub fn deposit(amount: Money) -> Result<Self> {
        return Self::new(TransactionKind::Deposit, amount);
    }

    pub fn withdrawal(amount: Money) -> Result<Self> {
        return Self::new(TransactionKind::Withdrawal, amount);
    }

    pub fn kind(&self) -> TransactionKind {
        return self.kind;
    }

    pub fn amount(&self) -> Money {
        return self.amount;
    }

    pub fn created_at(&self) -> NaiveDateTime {
        return self.created_at;
    }

    /// Applies the balance change to the account, without touching its history.
    /// Returns whether the account accepted the change.
    pub fn apply(&self, account: &mut Account) -> bool {
        return match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount),
            TransactionKind::Withdrawal => account.withdraw(self.amount),
        };
    }
}
