mod client_service;
mod transaction_service;

pub use client_service::{ClientService, ClientServiceError};
pub use transaction_service::TransactionService;
