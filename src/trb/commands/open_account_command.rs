use crate::ids::ClientId;
use crate::models::AccountConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAccountCommand {
    pub client_id: ClientId,
    pub config: AccountConfig,
}
