use std::fmt;

/// Tax identifier of a natural-person client
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub String);

impl ClientId {
    pub fn new(tax_id: impl Into<String>) -> Self {
        return Self(tax_id.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "ClientId({})", self.0);
    }
}
