//! Domain entity representing a railway station.

use chrono::{DateTime, Utc};

/// A station trains depart from and arrive at.
///
/// `code` is the short unique station code (e.g. `GMR`).
#[derive(Debug, Clone)]
pub struct Station {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable station fields, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStation {
    pub code: String,
    pub name: String,
    pub city: String,
}
