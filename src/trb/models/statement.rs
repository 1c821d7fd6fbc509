use super::Account;

use crate::ids::AccountId;
use crate::Money;

use std::fmt;

/// Printable view of an account's history followed by its current balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub account: AccountId,
    pub lines: Vec<String>,
    pub balance: Money,
}

impl Statement {
    pub fn from_account(account: &Account) -> Self {
        return Self {
            account: account.id().clone(),
            lines: account.history().iter().map(ToString::to_string).collect(),
            balance: account.balance(),
        };
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "=== Statement for account {} (branch {}) ===",
            self.account.number, self.account.branch
        )?;

        for line in self.lines.iter() {
            writeln!(f, " - {line}")?;
        }

        return write!(f, "Current balance: {}", self.balance);
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{AccountConfig, Client, Transaction, TransactionKind};

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn render() {
        let mut client = Client::new(
            "Ana Souza",
            "111",
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            "Rua das Flores, 10",
        );
        let id = Account::open(&mut client, 1, AccountConfig::checking(Money(5000), 3)).unwrap();

        let transactions = [
            (TransactionKind::Deposit, Money(10000), at(9, 0)),
            (TransactionKind::Withdrawal, Money(12000), at(9, 30)),
            (TransactionKind::Withdrawal, Money(14000), at(10, 0)),
            (TransactionKind::Deposit, Money(20000), at(11, 15)),
        ];

        for (kind, amount, timestamp) in transactions {
            let tx = Transaction::with_timestamp(kind, amount, timestamp).unwrap();
            client.execute(&id, tx).unwrap();
        }

        let statement = client.account(&id).unwrap().statement();

        assert_eq!(statement.account, id);
        assert_eq!(statement.balance, Money(18000));
        assert_eq!(
            statement.to_string(),
            "=== Statement for account 1 (branch 0001) ===\n\
             \x20- [31/01/2025 09:00:00] DEPOSIT: 100.00 | balance: 100.00\n\
             \x20- [31/01/2025 09:30:00] WITHDRAWAL: 120.00 | balance: -20.00\n\
             \x20- [31/01/2025 11:15:00] DEPOSIT: 200.00 | balance: 180.00\n\
             Current balance: 180.00"
        );
    }

    #[test]
    fn render_empty() {
        let account = Account::new(
            crate::ids::ClientId::new("111"),
            3,
            AccountConfig::basic().with_branch("0009"),
        )
        .unwrap();

        assert_eq!(
            account.statement().to_string(),
            "=== Statement for account 3 (branch 0009) ===\nCurrent balance: 0.00"
        );
    }
}
