//! Credential authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, TokenError};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the credential carried by the `Authorization` header.
///
/// The header must consist of exactly two whitespace-separated parts; the
/// second is returned. The scheme word is not checked. Any other shape, a
/// missing header or a non-ASCII value yields an empty string.
///
/// ```text
/// Authorization: Bearer <token>   -> "<token>"
/// Authorization: <token>          -> ""
/// Authorization: Bearer a b       -> ""
/// ```
pub fn extract_token(headers: &HeaderMap) -> String {
    let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return String::new();
    };

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_scheme), Some(token), None) => token.to_string(),
        _ => String::new(),
    }
}

/// Authenticates requests using the signed credential in the `Authorization` header.
///
/// # Authentication Flow
///
/// 1. Extract the credential with [`extract_token`]
/// 2. Verify signature, algorithm and expiry with the shared [`crate::auth::TokenCodec`]
/// 3. Attach the claims as [`CurrentUser`]
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with a fixed reason (`missing credential`,
/// `malformed credential`, `invalid signature`, `credential expired`,
/// `invalid <claim> claim`) when verification fails. A credential whose
/// `role` is not a known role is rejected with `403 Forbidden`.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/user", get(profile_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::authenticate));
/// ```
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers());

    let claims = state.token_codec.parse(&token).map_err(|e| {
        log_rejection(&e);
        AppError::from(e)
    })?;

    req.extensions_mut().insert(CurrentUser(claims));

    Ok(next.run(req).await)
}

fn log_rejection(e: &TokenError) {
    match e {
        TokenError::SecretUnavailable | TokenError::Signing(_) => {}
        kind => tracing::debug!(reason = %kind, "credential rejected"),
    }
}
