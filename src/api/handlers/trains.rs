//! Handlers for train administration.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::train::{TrainItem, TrainListResponse, TrainRequest};
use crate::api::extract::{Path, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/admin/trains`
pub async fn train_list_handler(
    State(state): State<AppState>,
) -> Result<Json<TrainListResponse>, AppError> {
    let trains = state.train_service.list_trains().await?;

    Ok(Json(TrainListResponse {
        items: trains.into_iter().map(TrainItem::from).collect(),
    }))
}

/// `POST /api/v1/admin/trains`
pub async fn create_train_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TrainRequest>,
) -> Result<(StatusCode, Json<TrainItem>), AppError> {
    let train = state.train_service.create_train(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(train.into())))
}

/// `GET /api/v1/admin/trains/{id}`
pub async fn get_train_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<TrainItem>, AppError> {
    let train = state.train_service.get_train(id).await?;
    Ok(Json(train.into()))
}

/// `PUT /api/v1/admin/trains/{id}`
pub async fn update_train_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TrainRequest>,
) -> Result<Json<TrainItem>, AppError> {
    let train = state.train_service.update_train(id, payload.into()).await?;
    Ok(Json(train.into()))
}

/// Deletes a train.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/trains/{id}`
///
/// # Errors
///
/// Returns 404 if the train does not exist.
/// Returns 409 while carriages still belong to the train.
pub async fn delete_train_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.train_service.delete_train(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
