use super::{Transaction, TransactionKind};

use crate::Money;

use std::fmt;

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Immutable outcome of a transaction that an account accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Money,
    timestamp: NaiveDateTime,
    resulting_balance: Money,
}

impl TransactionRecord {
    pub(super) fn new(transaction: &Transaction, resulting_balance: Money) -> Self {
        return Self {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: transaction.created_at(),
            resulting_balance,
        };
    }

    pub fn kind(&self) -> TransactionKind {
        return self.kind;
    }

    pub fn amount(&self) -> Money {
        return self.amount;
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        return self.timestamp;
    }

    pub fn resulting_balance(&self) -> Money {
        return self.resulting_balance;
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "[{}] {}: {} | balance: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount,
            self.resulting_balance,
        );
    }
}
