use super::ClientService;

use crate::commands::{
    Command, CommandOutcome, CreateClientCommand, OpenAccountCommand, StatementCommand,
    SubmitTransactionCommand,
};
use crate::ids::{AccountId, ClientId};
use crate::models::{Client, ClientError, Statement, Transaction, TransactionKind};
use crate::repository::ClientRepository;
use crate::Money;
use crate::Result;

pub struct TransactionService<R> {
    client_service: ClientService<R>,
}

impl<R: ClientRepository> TransactionService<R> {
    pub fn new(client_service: ClientService<R>) -> Self {
        return Self { client_service };
    }

    pub fn client_service(&self) -> &ClientService<R> {
        return &self.client_service;
    }

    /// Builds a transaction and has the client execute it.
    ///
    /// `Ok(false)` is a business refusal (insufficient funds, overdraft or withdrawal
    /// limit), errors are invalid amounts, unknown clients and foreign accounts.
    pub fn submit(
        &mut self,
        client_id: &ClientId,
        account_id: &AccountId,
        kind: TransactionKind,
        amount: Money,
    ) -> Result<bool> {
        let transaction = Transaction::new(kind, amount)?;

        log::debug!("Successfully created new transaction: {transaction:?}");

        let client = self.client_service.find_mut(client_id)?;

        return client.execute(account_id, transaction);
    }

    pub fn statement(&self, client_id: &ClientId, account_id: &AccountId) -> Result<Statement> {
        let client = self.client_service.find(client_id)?;

        let account = client
            .account(account_id)
            .ok_or_else(|| ClientError::ForeignAccount(client_id.clone(), account_id.clone()))?;

        return Ok(account.statement());
    }

    pub fn process_command(&mut self, command: Command) -> Result<CommandOutcome> {
        log::debug!("Processing command: {command:?}");

        let outcome = match command {
            Command::CreateClient(command) => self.process_create_client_command(command)?,

            Command::OpenAccount(command) => self.process_open_account_command(command)?,

            Command::SubmitTransaction(command) => {
                self.process_submit_transaction_command(command)?
            }

            Command::Statement(command) => self.process_statement_command(command)?,
        };

        return Ok(outcome);
    }

    fn process_create_client_command(&mut self, command: CreateClientCommand) -> Result<CommandOutcome> {
        let client = Client::new(
            command.name,
            command.client_id.0,
            command.birth_date,
            command.address,
        );

        let client_id = self.client_service.register_client(client)?;

        return Ok(CommandOutcome::ClientCreated(client_id));
    }

    fn process_open_account_command(&mut self, command: OpenAccountCommand) -> Result<CommandOutcome> {
        let account_id = self
            .client_service
            .open_account(&command.client_id, command.config)?;

        return Ok(CommandOutcome::AccountOpened(account_id));
    }

    fn process_submit_transaction_command(
        &mut self,
        command: SubmitTransactionCommand,
    ) -> Result<CommandOutcome> {
        let account_id = self.client_service.first_account_id(&command.client_id)?;

        let applied = self.submit(&command.client_id, &account_id, command.kind, command.amount)?;

        return Ok(CommandOutcome::TransactionApplied(applied));
    }

    fn process_statement_command(&mut self, command: StatementCommand) -> Result<CommandOutcome> {
        let account_id = self.client_service.first_account_id(&command.client_id)?;

        let statement = self.statement(&command.client_id, &account_id)?;

        return Ok(CommandOutcome::Statement(statement));
    }
}
