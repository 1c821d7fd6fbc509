mod account_id;
mod client_id;

pub use account_id::AccountId;
pub use client_id::ClientId;
