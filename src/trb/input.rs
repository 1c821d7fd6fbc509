use crate::commands::{
    Command, CreateClientCommand, OpenAccountCommand, StatementCommand, SubmitTransactionCommand,
};
use crate::ids::ClientId;
use crate::models::{AccountConfig, TransactionKind};
use crate::Money;
use crate::Result;

use chrono::NaiveDate;

use serde::Deserialize;

use thiserror::Error;

/// Overdraft granted to checking accounts opened from batch input
pub const DEFAULT_OVERDRAFT_LIMIT: Money = Money(50_000);

/// Represents an input row that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    pub action: InputAction,

    pub client: String,
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputAction {
    Client,
    Account,
    Deposit,
    Withdrawal,
    Statement,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: {0} value missing: {1:?}")]
    MissingField(&'static str, InputEvent),

    #[error("Error parsing input event: birth date must be YYYY-MM-DD: {0:?}")]
    InvalidBirthDate(InputEvent),
}

impl InputEvent {
    pub fn parse_command(self) -> Result<Command> {
        let client_id = ClientId::new(self.client.trim());

        let command = match self.action {
            InputAction::Client => {
                let name = self.required("name", &self.name)?;
                let address = self.required("address", &self.address)?;
                let birth_date = self.required("birth_date", &self.birth_date)?;

                let birth_date = NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d")
                    .map_err(|_| InputParseError::InvalidBirthDate(self.clone()))?;

                Command::CreateClient(CreateClientCommand {
                    client_id,
                    name,
                    birth_date,
                    address,
                })
            }
            InputAction::Account => Command::OpenAccount(OpenAccountCommand {
                client_id,
                config: AccountConfig::checking_default(DEFAULT_OVERDRAFT_LIMIT),
            }),
            InputAction::Deposit => Command::SubmitTransaction(SubmitTransactionCommand {
                client_id,
                kind: TransactionKind::Deposit,
                amount: Money::parse(&self.required("amount", &self.amount)?)?,
            }),
            InputAction::Withdrawal => Command::SubmitTransaction(SubmitTransactionCommand {
                client_id,
                kind: TransactionKind::Withdrawal,
                amount: Money::parse(&self.required("amount", &self.amount)?)?,
            }),
            InputAction::Statement => Command::Statement(StatementCommand { client_id }),
        };

        Ok(command)
    }

    fn required(&self, field: &'static str, value: &Option<String>) -> Result<String> {
        let value = value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| InputParseError::MissingField(field, self.clone()))?;

        return Ok(value.to_string());
    }
}
