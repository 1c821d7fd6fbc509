mod create_client_command;
mod open_account_command;
mod statement_command;
mod submit_transaction_command;

pub use create_client_command::CreateClientCommand;
pub use open_account_command::OpenAccountCommand;
pub use statement_command::StatementCommand;
pub use submit_transaction_command::SubmitTransactionCommand;

use crate::ids::{AccountId, ClientId};
use crate::models::Statement;

/// Typed batch command, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateClient(CreateClientCommand),
    OpenAccount(OpenAccountCommand),
    SubmitTransaction(SubmitTransactionCommand),
    Statement(StatementCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    ClientCreated(ClientId),
    AccountOpened(AccountId),
    /// `false` means the account's rules refused the transaction
    TransactionApplied(bool),
    Statement(Statement),
}
