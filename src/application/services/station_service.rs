//! Station management service.

use crate::domain::entities::{NewStation, Station};
use crate::domain::repositories::StationRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for administering stations.
///
/// Station codes are stored upper-cased so `gmr` and `GMR` collide.
pub struct StationService<R: StationRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: StationRepository + ?Sized> StationService<R> {
    /// Creates a new station service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a station.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_station(&self, station: NewStation) -> Result<Station, AppError> {
        self.repository.create(normalize(station)).await
    }

    /// Lists all stations.
    pub async fn list_stations(&self) -> Result<Vec<Station>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a station by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the station does not exist.
    pub async fn get_station(&self, id: i64) -> Result<Station, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("station not found"))
    }

    /// Replaces the editable fields of a station.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the station does not exist.
    /// Returns [`AppError::Conflict`] if the new code is taken.
    pub async fn update_station(&self, id: i64, station: NewStation) -> Result<Station, AppError> {
        self.repository.update(id, normalize(station)).await
    }

    /// Deletes a station.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the station does not exist.
    pub async fn delete_station(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

fn normalize(station: NewStation) -> NewStation {
    NewStation {
        code: station.code.trim().to_uppercase(),
        name: station.name.trim().to_string(),
        city: station.city.trim().to_string(),
    }
}
