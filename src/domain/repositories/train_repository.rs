//! Repository trait for trains.

use crate::domain::entities::{NewTrain, Train};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for trains.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTrainRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a train with the same code exists.
    async fn create(&self, train: NewTrain) -> Result<Train, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Train>, AppError>;

    /// Lists trains ordered by code.
    async fn list(&self) -> Result<Vec<Train>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the train does not exist.
    async fn update(&self, id: i64, train: NewTrain) -> Result<Train, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the train does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts carriages attached to a train.
    async fn count_carriages(&self, train_id: i64) -> Result<i64, AppError>;
}
