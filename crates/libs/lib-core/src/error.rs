//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`], returned by the upstream client,
//! the market service and the handlers, and turned into an HTTP response in
//! exactly one place ([`IntoResponse`]).
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (4xx)
//!    - [`InvalidInput`](AppError::InvalidInput) → 422 Unprocessable Entity
//!    - [`Forbidden`](AppError::Forbidden) → 403 Forbidden
//!    - [`NotFound`](AppError::NotFound) → 404 Not Found
//!
//! 2. **Upstream Errors**
//!    - [`Upstream`](AppError::Upstream) → the upstream status, body relayed verbatim
//!    - [`Unexpected`](AppError::Unexpected) → 500 with an `Unexpected error: ` prefix
//!
//! 3. **Server Errors**
//!    - [`Config`](AppError::Config) → 500 Internal Server Error
//!
//! ## Wire Format
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
#[derive(Debug, Error)]
pub enum AppError {
    /// The upstream API answered with a non-2xx status.
    ///
    /// **HTTP Status**: the upstream status code, body relayed unmodified
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Any other upstream failure (transport, timeout, malformed body).
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// API-key guard rejected the request.
    ///
    /// **HTTP Status**: 403 Forbidden
    #[error("Invalid or missing API Key")]
    Forbidden,

    /// Query string could not be coerced into the expected types.
    ///
    /// **HTTP Status**: 422 Unprocessable Entity
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No route matched.
    ///
    /// **HTTP Status**: 404 Not Found
    #[error("{0}")]
    NotFound(String),

    /// Configuration error during startup.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap any failure that is not an upstream status error.
    pub fn unexpected(cause: impl std::fmt::Display) -> Self {
        AppError::Unexpected(cause.to_string())
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Not every u16 is a valid status line; 502 is the closest honest answer
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field of the response body.
    pub fn detail(&self) -> String {
        match self {
            AppError::Upstream { body, .. } => body.clone(),
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Unexpected(_) | AppError::Forbidden | AppError::Config(_) => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Server error: {}", self);
        } else if matches!(self, AppError::Upstream { .. }) {
            tracing::warn!(status = status.as_u16(), "Upstream error: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Client error: {}", self);
        }

        let body = Json(ErrorResponse {
            detail: self.detail(),
        });

        (status, body).into_response()
    }
}

/// Query-string coercion failures (e.g. `page_num=abc`).
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}
