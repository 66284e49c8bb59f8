//! Train management service.

use crate::domain::entities::{NewTrain, Train};
use crate::domain::repositories::TrainRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for administering trains.
///
/// A train cannot be deleted while carriages reference it.
pub struct TrainService<R: TrainRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TrainRepository + ?Sized> TrainService<R> {
    /// Creates a new train service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a train.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    pub async fn create_train(&self, train: NewTrain) -> Result<Train, AppError> {
        self.repository.create(normalize(train)).await
    }

    pub async fn list_trains(&self) -> Result<Vec<Train>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a train by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the train does not exist.
    pub async fn get_train(&self, id: i64) -> Result<Train, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("train not found"))
    }

    /// Replaces the editable fields of a train.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the train does not exist.
    /// Returns [`AppError::Conflict`] if the new code is taken.
    pub async fn update_train(&self, id: i64, train: NewTrain) -> Result<Train, AppError> {
        self.repository.update(id, normalize(train)).await
    }

    /// Deletes a train with no carriages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the train does not exist.
    /// Returns [`AppError::Conflict`] if carriages still belong to the train.
    pub async fn delete_train(&self, id: i64) -> Result<(), AppError> {
        self.get_train(id).await?;

        let carriages = self.repository.count_carriages(id).await?;
        if carriages > 0 {
            return Err(AppError::conflict(format!(
                "train has {carriages} carriage(s); delete them first"
            )));
        }

        self.repository.delete(id).await
    }
}

fn normalize(train: NewTrain) -> NewTrain {
    NewTrain {
        code: train.code.trim().to_uppercase(),
        name: train.name.trim().to_string(),
        class: train.class,
    }
}
