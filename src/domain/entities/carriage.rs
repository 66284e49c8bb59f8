//! Domain entity representing a train carriage.

use chrono::{DateTime, Utc};

/// A carriage belonging to a train.
///
/// `carriage_number` is unique within its train.
#[derive(Debug, Clone)]
pub struct TrainCarriage {
    pub id: i64,
    pub train_id: i64,
    pub carriage_number: i32,
    pub seat_capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrainCarriage {
    pub train_id: i64,
    pub carriage_number: i32,
    pub seat_capacity: i32,
}
