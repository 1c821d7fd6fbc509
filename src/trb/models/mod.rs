mod account;
mod client;
mod statement;
mod transactions;
mod withdrawal_rule;

pub use account::{Account, AccountConfig, AccountError, DEFAULT_BRANCH};
pub use client::{Client, ClientError};
pub use statement::Statement;
pub use transactions::{
    History,
    Transaction,
    TransactionError,
    TransactionKind,
    TransactionRecord,
    TIMESTAMP_FORMAT,
};
pub use withdrawal_rule::{WithdrawalRule, DEFAULT_MAX_WITHDRAWALS};
