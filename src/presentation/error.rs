use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::DomainError;

/// json body of every error response
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Multipart(MultipartError),
    /// well-formed multipart that is missing or misusing a form field
    Form(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        Self::Multipart(error)
    }
}

// request that is not multipart at all, or has no boundary
impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Form(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_detail(self) -> (StatusCode, String) {
        match self {
            Self::Domain(error) => match error {
                DomainError::InvalidEmail(_) | DomainError::EmptyField(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
                }
                DomainError::UserAlreadyExists(_) => {
                    (StatusCode::BAD_REQUEST, "User ID already exists".to_string())
                }
                DomainError::Storage(cause) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error uploading to S3: {}", cause),
                ),
                // details are logged by the usecase, not sent to the caller
                DomainError::Repository(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
            },
            // only the body limit keeps its own status, 400 is reserved for conflicts
            Self::Multipart(error) => {
                let status = if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::UNPROCESSABLE_ENTITY
                };
                (status, error.body_text())
            }
            Self::Form(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        debug!(status = status.as_u16(), "request failed: {}", detail);
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
