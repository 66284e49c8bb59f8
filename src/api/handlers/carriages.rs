//! Handlers for train carriage administration.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::carriage::{
    CarriageItem, CarriageListParams, CarriageListResponse, CarriageRequest,
};
use crate::api::extract::{Path, Query, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists carriages.
///
/// # Endpoint
///
/// `GET /api/v1/admin/train-carriages?train_id=N`
///
/// `train_id` is optional; without it all carriages are returned.
pub async fn carriage_list_handler(
    State(state): State<AppState>,
    Query(params): Query<CarriageListParams>,
) -> Result<Json<CarriageListResponse>, AppError> {
    let carriages = state
        .carriage_service
        .list_carriages(params.train_id)
        .await?;

    Ok(Json(CarriageListResponse {
        items: carriages.into_iter().map(CarriageItem::from).collect(),
    }))
}

/// Adds a carriage to a train.
///
/// # Endpoint
///
/// `POST /api/v1/admin/train-carriages`
///
/// # Errors
///
/// Returns 404 if `train_id` does not name an existing train.
/// Returns 409 if the carriage number is taken within the train.
pub async fn create_carriage_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CarriageRequest>,
) -> Result<(StatusCode, Json<CarriageItem>), AppError> {
    let carriage = state
        .carriage_service
        .create_carriage(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(carriage.into())))
}

/// `GET /api/v1/admin/train-carriages/{id}`
pub async fn get_carriage_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CarriageItem>, AppError> {
    let carriage = state.carriage_service.get_carriage(id).await?;
    Ok(Json(carriage.into()))
}

/// `PUT /api/v1/admin/train-carriages/{id}`
pub async fn update_carriage_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CarriageRequest>,
) -> Result<Json<CarriageItem>, AppError> {
    let carriage = state
        .carriage_service
        .update_carriage(id, payload.into())
        .await?;
    Ok(Json(carriage.into()))
}

/// `DELETE /api/v1/admin/train-carriages/{id}`
pub async fn delete_carriage_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.carriage_service.delete_carriage(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
