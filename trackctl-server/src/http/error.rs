//! API error type with IntoResponse
//!
//! Every failure is `{"error": message}` with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trackctl_core::{Resource, TrackerError, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing or empty (400)
    Validation(ValidationError),

    /// Referenced entity does not exist (404)
    NotFound { resource: Resource, id: u64 },

    /// Body or path could not be decoded (400)
    Malformed { message: String },
}

impl ApiError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Malformed { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Malformed { message } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if let Self::NotFound { resource, id } = &self {
            tracing::debug!(%resource, id, "lookup missed");
        } else {
            tracing::debug!(%message, "rejected request");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<TrackerError> for ApiError {
    fn from(e: TrackerError) -> Self {
        match e {
            TrackerError::Validation(e) => Self::Validation(e),
            TrackerError::NotFound { resource, id } => Self::NotFound { resource, id },
        }
    }
}
