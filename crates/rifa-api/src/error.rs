//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use rifa_core::error::{AppError, ErrorKind};

/// Newtype over [`AppError`] so handlers can return domain errors with
/// `?` while the HTTP mapping lives in this crate.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error category code.
    pub error: String,
    /// Machine-readable reason for caller-fault errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        // Caller-fault conflicts (duplicate code, already confirmed,
        // exhausted pool) are part of the normal request flow and map
        // to 400, matching the public contract.
        let status = match &err.kind {
            ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database
            | ErrorKind::Notification
            | ErrorKind::Configuration
            | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err.message, "Server fault");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Server faults get a generic body; details stay in the log.
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            ApiErrorResponse {
                error: ErrorKind::Internal.to_string(),
                reason: None,
                message: "Internal server error".to_string(),
            }
        } else {
            ApiErrorResponse {
                error: err.kind.to_string(),
                reason: err.reason.map(str::to_string),
                message: err.message,
            }
        };

        (status, Json(body)).into_response()
    }
}
