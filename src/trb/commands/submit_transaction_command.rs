use crate::ids::ClientId;
use crate::models::TransactionKind;
use crate::Money;

/// Targets the client's first account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTransactionCommand {
    pub client_id: ClientId,
    pub kind: TransactionKind,
    pub amount: Money,
}
