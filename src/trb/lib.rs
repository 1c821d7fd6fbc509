pub mod commands;
pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod repository;
mod result;
pub mod services;

pub use money::{Money, MoneyError};
pub use result::Result;

pub fn build_transaction_service() -> services::TransactionService<repository::InMemoryClientRepository> {
    let repository = repository::InMemoryClientRepository::new();
    let client_service = services::ClientService::new(repository);
    let transaction_service = services::TransactionService::new(client_service);

    return transaction_service;
}
