//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crewboss_core::anthropic::AnthropicError;
use crewboss_core::auth::AuthError;
use crewboss_core::jobtread::JobTreadError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// Upstream rejected the stored credential (distinct from other upstream
    /// failures so the client can point the user at Settings).
    #[error("{0}")]
    UpstreamAuth(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.as_str()),
            AppError::Conflict(m) => (StatusCode::CONFLICT, m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            AppError::UpstreamAuth(m) => (StatusCode::UNAUTHORIZED, m.as_str()),
            AppError::Upstream(m) => (StatusCode::BAD_GATEWAY, m.as_str()),
            // Never leak internals to the client.
            AppError::Internal(m) => {
                tracing::error!("internal error: {m}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::DuplicateAccount => AppError::Conflict("Email already registered".into()),
            AuthError::Token(msg) => AppError::Internal(msg),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AnthropicError> for AppError {
    fn from(e: AnthropicError) -> Self {
        match e {
            AnthropicError::InvalidKey => AppError::UpstreamAuth(e.to_string()),
            _ => AppError::Upstream(e.to_string()),
        }
    }
}

impl From<JobTreadError> for AppError {
    fn from(e: JobTreadError) -> Self {
        match e {
            JobTreadError::InvalidKey => AppError::UpstreamAuth(e.to_string()),
            _ => AppError::Upstream(e.to_string()),
        }
    }
}
