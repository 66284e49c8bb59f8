//! Domain entity representing a train.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service class of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainClass {
    Economy,
    Business,
    Executive,
}

impl TrainClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainClass::Economy => "economy",
            TrainClass::Business => "business",
            TrainClass::Executive => "executive",
        }
    }
}

impl fmt::Display for TrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(TrainClass::Economy),
            "business" => Ok(TrainClass::Business),
            "executive" => Ok(TrainClass::Executive),
            other => Err(format!("unknown train class: {other}")),
        }
    }
}

/// A train operated on the network.
#[derive(Debug, Clone)]
pub struct Train {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub class: TrainClass,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable train fields, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrain {
    pub code: String,
    pub name: String,
    pub class: TrainClass,
}
