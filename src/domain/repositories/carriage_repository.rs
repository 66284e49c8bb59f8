//! Repository trait for train carriages.

use crate::domain::entities::{NewTrainCarriage, TrainCarriage};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for train carriages.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCarriageRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarriageRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the carriage number is taken within the train.
    async fn create(&self, carriage: NewTrainCarriage) -> Result<TrainCarriage, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TrainCarriage>, AppError>;

    /// Lists carriages, optionally restricted to one train, ordered by
    /// train and carriage number.
    async fn list(&self, train_id: Option<i64>) -> Result<Vec<TrainCarriage>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the carriage does not exist.
    async fn update(
        &self,
        id: i64,
        carriage: NewTrainCarriage,
    ) -> Result<TrainCarriage, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the carriage does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
