use crate::ids::ClientId;

/// Targets the client's first account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementCommand {
    pub client_id: ClientId,
}
