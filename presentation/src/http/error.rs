//! API error type and its JSON rendering.
//!
//! Every failure leaves the server as `{ "error": "<message>" }`. Messages
//! are written for the person at the keyboard; upstream detail goes to the
//! log, not the body, except for the catch-all `Failed to process text` and
//! store failures on the stats route.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reconstruct_application::{GatewayError, ReconstructError, RestoreError, StatsError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<ReconstructError> for ApiError {
    fn from(err: ReconstructError) -> Self {
        match err {
            ReconstructError::Validation(e) => ApiError::BadRequest(e.to_string()),
            ReconstructError::Configuration => {
                ApiError::Internal("Gemini API key not configured".to_string())
            }
            ReconstructError::Upstream(GatewayError::NoResponse) => {
                ApiError::Internal("No response from Gemini API".to_string())
            }
            ReconstructError::Upstream(e) => {
                ApiError::Internal(format!("Failed to process text: {}", e))
            }
            ReconstructError::Extraction(_) => {
                ApiError::Internal("Failed to extract text from response".to_string())
            }
            ReconstructError::EmptyResponse => {
                ApiError::Internal("Empty response from Gemini API".to_string())
            }
            ReconstructError::Corrupted(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<RestoreError> for ApiError {
    fn from(err: RestoreError) -> Self {
        match err {
            RestoreError::Validation(e) => ApiError::BadRequest(e.to_string()),
            RestoreError::Unauthorized => ApiError::Unauthorized,
            RestoreError::NotFound => ApiError::NotFound(RestoreError::NotFound.to_string()),
        }
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Unauthorized => ApiError::Unauthorized,
            StatsError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}
