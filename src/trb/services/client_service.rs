use crate::ids::{AccountId, ClientId};
use crate::models::{Account, AccountConfig, Client};
use crate::repository::ClientRepository;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientServiceError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Client has no accounts: {0}")]
    NoAccounts(ClientId),
}

pub struct ClientService<R> {
    repository: R,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repository: R) -> Self {
        return Self { repository };
    }

    pub fn register_client(&mut self, client: Client) -> Result<ClientId> {
        let client_id = client.id().clone();

        log::debug!("Registering client: {client}");
        self.repository.insert(client)?;

        return Ok(client_id);
    }

    /// Opens an account numbered after the ones the client already holds
    pub fn open_account(&mut self, client_id: &ClientId, config: AccountConfig) -> Result<AccountId> {
        let client = self.find_mut(client_id)?;
        let number = client.next_account_number()?;

        return Account::open(client, number, config);
    }

    pub fn open_account_with_number(
        &mut self,
        client_id: &ClientId,
        number: u32,
        config: AccountConfig,
    ) -> Result<AccountId> {
        let client = self.find_mut(client_id)?;

        return Account::open(client, number, config);
    }

    pub fn find(&self, client_id: &ClientId) -> Result<&Client> {
        let client = self
            .repository
            .find_by_identifier(client_id)
            .ok_or_else(|| ClientServiceError::ClientNotFound(client_id.clone()))?;

        return Ok(client);
    }

    pub fn find_mut(&mut self, client_id: &ClientId) -> Result<&mut Client> {
        let client = self
            .repository
            .find_by_identifier_mut(client_id)
            .ok_or_else(|| ClientServiceError::ClientNotFound(client_id.clone()))?;

        return Ok(client);
    }

    pub fn first_account_id(&self, client_id: &ClientId) -> Result<AccountId> {
        let account = self
            .find(client_id)?
            .first_account()
            .ok_or_else(|| ClientServiceError::NoAccounts(client_id.clone()))?;

        return Ok(account.id().clone());
    }
}
