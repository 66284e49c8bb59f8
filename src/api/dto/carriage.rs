//! DTOs for train carriage administration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewTrainCarriage, TrainCarriage};

/// Create or full-replace payload for a carriage.
#[derive(Debug, Deserialize, Validate)]
pub struct CarriageRequest {
    #[validate(range(min = 1))]
    pub train_id: i64,

    #[validate(range(min = 1))]
    pub carriage_number: i32,

    #[validate(range(min = 1, max = 1000))]
    pub seat_capacity: i32,
}

impl From<CarriageRequest> for NewTrainCarriage {
    fn from(r: CarriageRequest) -> Self {
        NewTrainCarriage {
            train_id: r.train_id,
            carriage_number: r.carriage_number,
            seat_capacity: r.seat_capacity,
        }
    }
}

/// `GET /admin/train-carriages?train_id=N`
#[derive(Debug, Deserialize)]
pub struct CarriageListParams {
    pub train_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CarriageItem {
    pub id: i64,
    pub train_id: i64,
    pub carriage_number: i32,
    pub seat_capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TrainCarriage> for CarriageItem {
    fn from(c: TrainCarriage) -> Self {
        Self {
            id: c.id,
            train_id: c.train_id,
            carriage_number: c.carriage_number,
            seat_capacity: c.seat_capacity,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarriageListResponse {
    pub items: Vec<CarriageItem>,
}
