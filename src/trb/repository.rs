use crate::ids::ClientId;
use crate::models::Client;
use crate::Result;

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Duplicate client: {0} is already registered")]
    DuplicateClient(ClientId),
}

/// Lookup and storage of clients, passed to the services instead of a global registry
pub trait ClientRepository {
    fn find_by_identifier(&self, id: &ClientId) -> Option<&Client>;

    fn find_by_identifier_mut(&mut self, id: &ClientId) -> Option<&mut Client>;

    fn insert(&mut self, client: Client) -> Result;
}

pub type ClientDataStore = HashMap<ClientId, Client>;

/// Process-lifetime repository; nothing outlives the value
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    store: ClientDataStore,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClientRepository for InMemoryClientRepository {
    fn find_by_identifier(&self, id: &ClientId) -> Option<&Client> {
        return self.store.get(id);
    }

    fn find_by_identifier_mut(&mut self, id: &ClientId) -> Option<&mut Client> {
        return self.store.get_mut(id);
    }

    fn insert(&mut self, client: Client) -> Result {
        if self.store.contains_key(client.id()) {
            Err(RepositoryError::DuplicateClient(client.id().clone()))?
        }

        self.store.insert(client.id().clone(), client);

        return Ok(());
    }
}
