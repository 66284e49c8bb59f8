//! Identity attached to a request by the Authenticator.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::Claims;
use crate::error::AppError;

/// Verified claims of the caller, stored in the request extensions.
///
/// Only the Authenticator inserts this value; handlers and the Authorizer
/// read it. Extracting it on a route without the Authenticator in front is a
/// wiring mistake and yields a 500.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::internal("CurrentUser requested on an unauthenticated route"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use axum::http::Request;
    use chrono::Utc;

    #[tokio::test]
    async fn test_reads_attached_identity() {
        let claims = Claims::new(9, Role::User, Utc::now());
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        parts.extensions.insert(CurrentUser(claims.clone()));

        let CurrentUser(found) = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(found, claims);
    }

    #[tokio::test]
    async fn test_missing_identity_is_internal() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let err = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
