//! Train carriage management service.

use crate::domain::entities::{NewTrainCarriage, TrainCarriage};
use crate::domain::repositories::{CarriageRepository, TrainRepository};
use crate::error::AppError;
use std::sync::Arc;

/// Service for administering the carriages of trains.
///
/// Every write checks that the referenced train exists so a bad `train_id`
/// is reported as not found instead of a constraint violation.
pub struct CarriageService<C, T>
where
    C: CarriageRepository + ?Sized,
    T: TrainRepository + ?Sized,
{
    carriages: Arc<C>,
    trains: Arc<T>,
}

impl<C, T> CarriageService<C, T>
where
    C: CarriageRepository + ?Sized,
    T: TrainRepository + ?Sized,
{
    pub fn new(carriages: Arc<C>, trains: Arc<T>) -> Self {
        Self { carriages, trains }
    }

    /// Adds a carriage to a train.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the number or capacity is not positive.
    /// Returns [`AppError::NotFound`] if the train does not exist.
    /// Returns [`AppError::Conflict`] if the carriage number is taken.
    pub async fn create_carriage(
        &self,
        carriage: NewTrainCarriage,
    ) -> Result<TrainCarriage, AppError> {
        validate(&carriage)?;
        self.ensure_train(carriage.train_id).await?;
        self.carriages.create(carriage).await
    }

    /// Lists carriages, optionally of a single train.
    pub async fn list_carriages(
        &self,
        train_id: Option<i64>,
    ) -> Result<Vec<TrainCarriage>, AppError> {
        self.carriages.list(train_id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the carriage does not exist.
    pub async fn get_carriage(&self, id: i64) -> Result<TrainCarriage, AppError> {
        self.carriages
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("carriage not found"))
    }

    /// Replaces the editable fields of a carriage, possibly moving it to
    /// another train.
    pub async fn update_carriage(
        &self,
        id: i64,
        carriage: NewTrainCarriage,
    ) -> Result<TrainCarriage, AppError> {
        validate(&carriage)?;
        self.ensure_train(carriage.train_id).await?;
        self.carriages.update(id, carriage).await
    }

    pub async fn delete_carriage(&self, id: i64) -> Result<(), AppError> {
        self.carriages.delete(id).await
    }

    async fn ensure_train(&self, train_id: i64) -> Result<(), AppError> {
        match self.trains.find_by_id(train_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!("train {train_id} not found"))),
        }
    }
}

fn validate(carriage: &NewTrainCarriage) -> Result<(), AppError> {
    if carriage.carriage_number < 1 {
        return Err(AppError::bad_request("carriage_number must be at least 1"));
    }
    if carriage.seat_capacity < 1 {
        return Err(AppError::bad_request("seat_capacity must be at least 1"));
    }
    Ok(())
}
