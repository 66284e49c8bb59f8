//! Domain entity representing a user account.

use chrono::{DateTime, Utc};

use crate::auth::Role;

/// A registered account.
///
/// `password_hash` is a bcrypt hash and never leaves the service layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Identifier as carried in the `userId` claim.
    ///
    /// Database ids are positive `BIGSERIAL` values, so the conversion never fails
    /// for persisted rows.
    pub fn claim_id(&self) -> Option<u64> {
        u64::try_from(self.id).ok()
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Profile changes. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}
