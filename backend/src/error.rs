//! Application error handling
//!
//! Every failure leaves the API as an `ErrorResponse` envelope. Calculator
//! validation failures carry the offending field so clients can highlight it.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;
use weight_loss_shared::types::{ErrorDetail, ErrorResponse};
use weight_loss_shared::ValidationError;

/// Errors surfaced by calculator handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected by the calculator validators
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body could not be read as the expected JSON shape
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                err.user_message(),
                Some(err.field.clone()),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
            ApiError::Internal(err) => {
                error!(error = ?err, "Calculator request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let detail = ErrorDetail {
            code: code.to_string(),
            message,
            field,
        };
        (status, Json(ErrorResponse { error: detail })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
