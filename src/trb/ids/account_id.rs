use super::ClientId;

use std::fmt;

/// Handle to an account: the owning client plus the (number, branch) pair that is unique per client
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId {
    pub client: ClientId,
    pub number: u32,
    pub branch: String,
}

impl AccountId {
    pub fn new(client: ClientId, number: u32, branch: impl Into<String>) -> Self {
        return Self {
            client,
            number,
            branch: branch.into(),
        };
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}/{} of {}", self.branch, self.number, self.client);
    }
}
