//! Handlers for account administration.

use axum::{Json, extract::State};

use crate::api::dto::user::{SetRoleRequest, UserItem, UserListResponse};
use crate::api::extract::{Path, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/admin/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(UserListResponse {
        items: users.into_iter().map(UserItem::from).collect(),
    }))
}

/// Promotes or demotes an account.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/users/{id}/role`
///
/// Takes effect on the next login; outstanding credentials keep their role.
pub async fn set_role_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SetRoleRequest>,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.set_role(id, payload.role).await?;
    Ok(Json(user.into()))
}
