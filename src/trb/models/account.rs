use super::{Client, History, Statement, Transaction, WithdrawalRule};

use crate::ids::{AccountId, ClientId};
use crate::Money;
use crate::Result;

use std::fmt;

use thiserror::Error;

pub const DEFAULT_BRANCH: &str = "0001";

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid overdraft limit: must not be negative, got {0}")]
    NegativeOverdraftLimit(Money),
}

/// Variant-specific settings used when opening an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    pub branch: String,
    pub rule: WithdrawalRule,
}

impl AccountConfig {
    pub fn basic() -> Self {
        return Self {
            branch: DEFAULT_BRANCH.to_string(),
            rule: WithdrawalRule::Basic,
        };
    }

    /// Checking account allowing the default number of withdrawals
    pub fn checking_default(overdraft_limit: Money) -> Self {
        return Self {
            branch: DEFAULT_BRANCH.to_string(),
            rule: WithdrawalRule::checking(overdraft_limit),
        };
    }

    pub fn checking(overdraft_limit: Money, max_withdrawals: usize) -> Self {
        return Self {
            branch: DEFAULT_BRANCH.to_string(),
            rule: WithdrawalRule::Checking {
                overdraft_limit,
                max_withdrawals,
            },
        };
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        return self;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Money,
    history: History,
    rule: WithdrawalRule,
}

impl Account {
    pub fn new(owner: ClientId, number: u32, config: AccountConfig) -> Result<Self> {
        if let WithdrawalRule::Checking {
            overdraft_limit, ..
        } = config.rule
        {
            if overdraft_limit.is_negative() {
                Err(AccountError::NegativeOverdraftLimit(overdraft_limit))?
            }
        }

        return Ok(Self {
            id: AccountId::new(owner, number, config.branch),
            balance: Money::ZERO,
            history: History::new(),
            rule: config.rule,
        });
    }

    /// Builds the account described by `config` and registers it with its owner.
    /// Fails if the client already holds an account with the same number and branch.
    pub fn open(client: &mut Client, number: u32, config: AccountConfig) -> Result<AccountId> {
        let account = Self::new(client.id().clone(), number, config)?;
        let id = account.id.clone();

        client.register_account(account)?;

        return Ok(id);
    }

    pub fn id(&self) -> &AccountId {
        return &self.id;
    }

    pub fn number(&self) -> u32 {
        return self.id.number;
    }

    pub fn branch(&self) -> &str {
        return &self.id.branch;
    }

    pub fn owner(&self) -> &ClientId {
        return &self.id.client;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn history(&self) -> &History {
        return &self.history;
    }

    pub fn rule(&self) -> &WithdrawalRule {
        return &self.rule;
    }

    pub fn deposit(&mut self, amount: Money) -> bool {
        if !amount.is_positive() {
            return false;
        }

        match self.balance.checked_add(&amount) {
            Ok(balance) => {
                self.balance = balance;
                true
            }
            Err(e) => {
                log::debug!("Rejected deposit on {}: {e}", self.id);
                false
            }
        }
    }

    pub fn withdraw(&mut self, amount: Money) -> bool {
        match self.rule.evaluate(self.balance, &self.history, amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    pub fn statement(&self) -> Statement {
        return Statement::from_account(self);
    }

    /// Logs an applied transaction with the current balance
    pub(super) fn record(&mut self, transaction: &Transaction) {
        self.history.append(transaction, self.balance);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let variant = match self.rule {
            WithdrawalRule::Basic => "BasicAccount",
            WithdrawalRule::Checking { .. } => "CheckingAccount",
        };

        return write!(
            f,
            "{variant}(branch={}, number={}, balance={})",
            self.id.branch, self.id.number, self.balance
        );
    }
}
