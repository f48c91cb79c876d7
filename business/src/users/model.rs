use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier as served by the API: either a number or an opaque string
/// (e.g. a 24-hex document id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Num(u64),
    Str(String),
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self::Num(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_owned())
    }
}

impl PartialEq<u64> for UserId {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Self::Num(id) if id == other)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

/// A user account as served by `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable identifier, used as the row key.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created_date: DateTime<Utc>,
}

impl UserRecord {
    /// `"{first} {last}"`, the text the search box matches names against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
