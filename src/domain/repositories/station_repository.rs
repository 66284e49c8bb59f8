//! Repository trait for stations.

use crate::domain::entities::{NewStation, Station};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a station with the same code exists.
    async fn create(&self, station: NewStation) -> Result<Station, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError>;

    /// Lists stations ordered by code.
    async fn list(&self) -> Result<Vec<Station>, AppError>;

    /// Replaces all editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the station does not exist.
    /// Returns [`AppError::Conflict`] if the new code is taken.
    async fn update(&self, id: i64, station: NewStation) -> Result<Station, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the station does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
