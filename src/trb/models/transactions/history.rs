use super::{Transaction, TransactionKind, TransactionRecord};

use crate::Money;

use std::slice;

/// WORM (Write Once, Read Many) sequence of the records of a single account,
/// kept in the order the transactions were applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The caller guarantees that `transaction` has already been applied and
    /// that `resulting_balance` is the balance right after it.
    pub fn append(&mut self, transaction: &Transaction, resulting_balance: Money) {
        self.records
            .push(TransactionRecord::new(transaction, resulting_balance));
    }

    pub fn withdrawal_count(&self) -> usize {
        return self
            .records
            .iter()
            .filter(|record| record.kind() == TransactionKind::Withdrawal)
            .count();
    }

    pub fn iter(&self) -> slice::Iter<'_, TransactionRecord> {
        return self.records.iter();
    }

    pub fn last(&self) -> Option<&TransactionRecord> {
        return self.records.last();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TransactionRecord;
    type IntoIter = slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}
