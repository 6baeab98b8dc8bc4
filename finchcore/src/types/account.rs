use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountIdError {
    #[error("Invalid account id format: {0}")]
    InvalidFormat(String),
}

/// Identifies a logged-in account as `id@host`, e.g. `12345@birdsite.example`.
///
/// The id part is the service-assigned user identifier; the host part names
/// the service instance the account lives on. Two accounts with the same id
/// on different hosts are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId {
    pub id: String,
    pub host: String,
}

impl AccountId {
    pub fn new(id: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            host: host.into(),
        }
    }

    pub fn is_same_host_as(&self, other: &AccountId) -> bool {
        self.host == other.host
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.host)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, host) = s
            .split_once('@')
            .ok_or_else(|| AccountIdError::InvalidFormat(s.to_string()))?;
        if id.is_empty() || host.is_empty() || host.contains('@') {
            return Err(AccountIdError::InvalidFormat(s.to_string()));
        }
        Ok(Self::new(id, host))
    }
}
