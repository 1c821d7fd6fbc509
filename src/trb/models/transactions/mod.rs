mod history;
mod kind;
mod record;
mod transaction;

pub use history::History;
pub use kind::TransactionKind;
pub use record::{TransactionRecord, TIMESTAMP_FORMAT};
pub use transaction::{Transaction, TransactionError};
