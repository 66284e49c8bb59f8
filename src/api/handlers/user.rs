//! Handlers for the caller's own account.
//!
//! Mounted under `/api/v1/user` behind Authenticator + Authorizer(`user`);
//! the caller is always identified by the `userId` claim.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::user::{ChangePasswordRequest, UpdateProfileRequest, UserItem};
use crate::api::extract::ValidatedJson;
use crate::auth::CurrentUser;
use crate::domain::entities::UpdateUser;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/v1/user`
pub async fn profile_handler(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
) -> Result<Json<UserItem>, AppError> {
    let user = state.user_service.get_profile(claims.user_id).await?;
    Ok(Json(user.into()))
}

/// `PUT /api/v1/user`
///
/// # Errors
///
/// Returns 409 if the new email belongs to another account.
pub async fn update_profile_handler(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserItem>, AppError> {
    let update = UpdateUser {
        name: payload.name,
        email: payload.email,
    };

    let user = state
        .user_service
        .update_profile(claims.user_id, update)
        .await?;

    Ok(Json(user.into()))
}

/// `PUT /api/v1/user/password`
///
/// Credentials issued before the change stay valid until they expire.
///
/// # Errors
///
/// Returns 401 if `current_password` is wrong.
pub async fn change_password_handler(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<StatusCode, AppError> {
    state
        .user_service
        .change_password(
            claims.user_id,
            &payload.current_password,
            &payload.new_password,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
