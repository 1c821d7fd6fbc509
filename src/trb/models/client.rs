use super::{Account, Transaction};

use crate::ids::{AccountId, ClientId};
use crate::Result;

use std::fmt;

use chrono::NaiveDate;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Duplicate account: {0} already holds account number {1} at branch {2}")]
    DuplicateAccount(ClientId, u32, String),

    #[error("Foreign account: account {1} does not belong to {0}")]
    ForeignAccount(ClientId, AccountId),

    #[error("Account numbers exhausted for {0}")]
    AccountNumbersExhausted(ClientId),
}

/// Natural-person client, the only party allowed to move money on its accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        return Self {
            id: ClientId::new(tax_id),
            name: name.into(),
            birth_date,
            address: address.into(),
            accounts: Vec::new(),
        };
    }

    pub fn id(&self) -> &ClientId {
        return &self.id;
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn birth_date(&self) -> NaiveDate {
        return self.birth_date;
    }

    pub fn address(&self) -> &str {
        return &self.address;
    }

    pub fn accounts(&self) -> &[Account] {
        return &self.accounts;
    }

    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        return self.accounts.iter().find(|account| account.id() == id);
    }

    pub fn first_account(&self) -> Option<&Account> {
        return self.accounts.first();
    }

    /// Number handed out to the next account opened for this client, one past the
    /// highest number it holds
    pub fn next_account_number(&self) -> Result<u32> {
        let highest = self
            .accounts
            .iter()
            .map(Account::number)
            .max()
            .unwrap_or(0);

        let next = highest
            .checked_add(1)
            .ok_or_else(|| ClientError::AccountNumbersExhausted(self.id.clone()))?;

        return Ok(next);
    }

    pub fn register_account(&mut self, account: Account) -> Result {
        if account.owner() != &self.id {
            Err(ClientError::ForeignAccount(
                self.id.clone(),
                account.id().clone(),
            ))?
        }

        let duplicate = self
            .accounts
            .iter()
            .any(|a| a.number() == account.number() && a.branch() == account.branch());

        if duplicate {
            Err(ClientError::DuplicateAccount(
                self.id.clone(),
                account.number(),
                account.branch().to_string(),
            ))?
        }

        log::debug!("Registered {account} for {}", self.id);

        self.accounts.push(account);

        return Ok(());
    }

    /// Applies `transaction` to one of this client's accounts.
    ///
    /// Returns `Ok(false)` when the account's rules reject it, in which case neither the
    /// balance nor the history change. On success the history gets a record with the
    /// balance right after the change.
    pub fn execute(&mut self, account_id: &AccountId, transaction: Transaction) -> Result<bool> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id() == account_id)
            .ok_or_else(|| ClientError::ForeignAccount(self.id.clone(), account_id.clone()))?;

        let success = transaction.apply(account);

        if success {
            account.record(&transaction);
            log::debug!("Applied {transaction:?} to {account}");
        } else {
            log::debug!("Rejected {transaction:?} on {account}");
        }

        return Ok(success);
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Client(name={:?}, tax_id={:?})", self.name, self.id.as_str());
    }
}
