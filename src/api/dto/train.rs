//! DTOs for train administration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewTrain, Train, TrainClass};

/// Create or full-replace payload for a train.
///
/// `class` must be one of `economy`, `business`, `executive`.
#[derive(Debug, Deserialize, Validate)]
pub struct TrainRequest {
    #[validate(length(min = 1, max = 20))]
    pub code: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub class: TrainClass,
}

impl From<TrainRequest> for NewTrain {
    fn from(r: TrainRequest) -> Self {
        NewTrain {
            code: r.code,
            name: r.name,
            class: r.class,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainItem {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub class: TrainClass,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Train> for TrainItem {
    fn from(t: Train) -> Self {
        Self {
            id: t.id,
            code: t.code,
            name: t.name,
            class: t.class,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrainListResponse {
    pub items: Vec<TrainItem>,
}
