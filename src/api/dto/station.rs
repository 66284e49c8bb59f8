//! DTOs for station administration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStation, Station};

/// Create or full-replace payload for a station.
#[derive(Debug, Deserialize, Validate)]
pub struct StationRequest {
    #[validate(length(min = 1, max = 10))]
    pub code: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,
}

impl From<StationRequest> for NewStation {
    fn from(r: StationRequest) -> Self {
        NewStation {
            code: r.code,
            name: r.name,
            city: r.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StationItem {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Station> for StationItem {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            code: s.code,
            name: s.name,
            city: s.city,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub items: Vec<StationItem>,
}
