//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_fees::FeesError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<FeesError> for ApiError {
    fn from(err: FeesError) -> Self {
        match err {
            FeesError::Validation(_) => ApiError::Validation(err.to_string()),
            FeesError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            FeesError::NotAssigned(_) | FeesError::TemplateInUse(_) | FeesError::Conflict(_) => {
                ApiError::Conflict(err.to_string())
            }
            FeesError::Money(_) => ApiError::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{StudentId, TemplateId};

    #[test]
    fn test_not_assigned_maps_to_conflict() {
        let api: ApiError = FeesError::NotAssigned(StudentId::new()).into();
        assert!(matches!(api, ApiError::Conflict(_)));
    }

    #[test]
    fn test_template_in_use_maps_to_conflict() {
        let api: ApiError = FeesError::TemplateInUse(TemplateId::new()).into();
        assert!(matches!(api, ApiError::Conflict(_)));
    }

    #[test]
    fn test_validation_maps_to_unprocessable() {
        let api: ApiError = FeesError::validation("bad amount").into();
        assert!(matches!(api, ApiError::Validation(_)));
    }
}
