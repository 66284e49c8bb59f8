//! Handlers for the public credential endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a `user` account and signs the caller in.
///
/// # Endpoint
///
/// `POST /api/v1/register`
///
/// # Errors
///
/// Returns 400 if the payload is invalid.
/// Returns 409 if the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let (user, token) = state
        .auth_service
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// Exchanges email and password for a credential.
///
/// # Endpoint
///
/// `POST /api/v1/login`
///
/// # Errors
///
/// Returns 401 with `invalid email or password` on unknown email or wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (user, token) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
