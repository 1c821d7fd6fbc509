use crate::ids::ClientId;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClientCommand {
    pub client_id: ClientId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}
