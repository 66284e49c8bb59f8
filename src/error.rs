//! HTTP error type and the JSON error envelope.
//!
//! Every failure leaving the API, from middleware or handlers, is rendered as
//!
//! ```json
//! { "statusCode": 401, "message": "Unauthorized", "errors": "credential expired" }
//! ```
//!
//! with the HTTP status equal to `statusCode`. `message` is the canonical
//! reason phrase of the status; `errors` is a short human-readable reason.
//! Internal diagnostics are logged, never rendered.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::auth::TokenError;

/// Wire shape of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub errors: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, errors: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Error").to_string(),
            errors: errors.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation { errors: String },
    Unauthorized { errors: String },
    Forbidden { errors: String },
    NotFound { errors: String },
    Conflict { errors: String },
    /// `detail` goes to the log only.
    Internal { detail: String },
}

impl AppError {
    pub fn bad_request(errors: impl Into<String>) -> Self {
        Self::Validation {
            errors: errors.into(),
        }
    }
    pub fn unauthorized(errors: impl Into<String>) -> Self {
        Self::Unauthorized {
            errors: errors.into(),
        }
    }
    pub fn forbidden(errors: impl Into<String>) -> Self {
        Self::Forbidden {
            errors: errors.into(),
        }
    }
    pub fn not_found(errors: impl Into<String>) -> Self {
        Self::NotFound {
            errors: errors.into(),
        }
    }
    pub fn conflict(errors: impl Into<String>) -> Self {
        Self::Conflict {
            errors: errors.into(),
        }
    }
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope sent to the client.
    pub fn to_body(&self) -> ErrorResponse {
        let errors = match self {
            AppError::Validation { errors }
            | AppError::Unauthorized { errors }
            | AppError::Forbidden { errors }
            | AppError::NotFound { errors }
            | AppError::Conflict { errors } => errors.as_str(),
            AppError::Internal { .. } => "internal server error",
        };

        ErrorResponse::new(self.status(), errors)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Internal { detail } => write!(f, "internal error: {detail}"),
            other => {
                let body = other.to_body();
                write!(f, "{}: {}", body.message, body.errors)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { detail } = &self {
            tracing::error!(detail = %detail, "request failed with internal error");
        }

        (self.status(), Json(self.to_body())).into_response()
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::MissingClaim("role") => AppError::forbidden(e.to_string()),
            TokenError::MissingCredential
            | TokenError::Malformed
            | TokenError::BadSignature
            | TokenError::Expired
            | TokenError::MissingClaim(_) => AppError::unauthorized(e.to_string()),
            TokenError::SecretUnavailable | TokenError::Signing(_) => {
                AppError::internal(e.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AppError::internal(format!("password hashing failed: {e}"))
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::RowNotFound = e {
        return AppError::not_found("resource not found");
    }

    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict("resource already exists");
        }
        if db.is_foreign_key_violation() {
            return AppError::conflict("resource is referenced by other records");
        }
    }

    AppError::internal(format!("database error: {e}"))
}
