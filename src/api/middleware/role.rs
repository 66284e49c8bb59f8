//! Role authorization middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, Role};
use crate::error::AppError;

/// Rejects requests whose verified role differs from the required one.
///
/// Must run after [`super::auth::authenticate`] on the same chain: it reads
/// the [`CurrentUser`] the Authenticator attached. Without it the request
/// fails with 500.
///
/// # Errors
///
/// Returns `403 Forbidden` with `errors: "Unauthorized access"` on a role
/// mismatch. Matching is exact, so `admin` does not pass a `user` gate.
///
/// # Example
///
/// ```rust,ignore
/// let admin = admin_routes()
///     .route_layer(middleware::from_fn_with_state(Role::Admin, role::authorize))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::authenticate));
/// ```
pub async fn authorize(
    State(required): State<Role>,
    CurrentUser(claims): CurrentUser,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !claims.has_role(required) {
        tracing::debug!(
            user_id = claims.user_id,
            role = %claims.role,
            required = %required,
            "role mismatch"
        );
        return Err(AppError::forbidden("Unauthorized access"));
    }

    Ok(next.run(req).await)
}
