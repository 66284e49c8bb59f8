//! Claim set and role model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifetime of an issued credential.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Access role carried by a credential.
///
/// Matching is exact: `Admin` does not imply `User`. A route class gated by
/// one role rejects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-sensitive: `"Admin"` is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Decoded credential payload.
///
/// Serialized field names follow the wire format: `authorized`, `userId`,
/// `role`, `exp` (seconds since the Unix epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    pub authorized: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub role: Role,
    pub exp: i64,
}

impl Claims {
    /// Builds the claim set for a credential issued at `issued_at`.
    pub fn new(user_id: u64, role: Role, issued_at: DateTime<Utc>) -> Self {
        Self {
            authorized: true,
            user_id,
            role,
            exp: (issued_at + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
