//! Handlers for station administration.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::station::{StationItem, StationListResponse, StationRequest};
use crate::api::extract::{Path, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/admin/stations`
pub async fn station_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StationListResponse>, AppError> {
    let stations = state.station_service.list_stations().await?;

    Ok(Json(StationListResponse {
        items: stations.into_iter().map(StationItem::from).collect(),
    }))
}

/// Creates a station.
///
/// # Endpoint
///
/// `POST /api/v1/admin/stations`
///
/// # Errors
///
/// Returns 409 if the station code already exists.
pub async fn create_station_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StationRequest>,
) -> Result<(StatusCode, Json<StationItem>), AppError> {
    let station = state.station_service.create_station(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(station.into())))
}

/// `GET /api/v1/admin/stations/{id}`
pub async fn get_station_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StationItem>, AppError> {
    let station = state.station_service.get_station(id).await?;
    Ok(Json(station.into()))
}

/// `PUT /api/v1/admin/stations/{id}`
pub async fn update_station_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StationRequest>,
) -> Result<Json<StationItem>, AppError> {
    let station = state
        .station_service
        .update_station(id, payload.into())
        .await?;
    Ok(Json(station.into()))
}

/// `DELETE /api/v1/admin/stations/{id}`
pub async fn delete_station_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.station_service.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
