//! API error envelope
//!
//! Every failing handler returns `ApiError`, which renders as
//! `{"success": false, "message": "..."}` with the status code carrying the
//! error class.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use vocalis::DomainError;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body could not be extracted (syntax, content type or fields)
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Route not found: {0}")]
    NotFound(String),

    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err {
                DomainError::Configuration(_)
                | DomainError::EmptyGeneration
                | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
                DomainError::Upstream { status, .. } => StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                DomainError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let detail = match &self {
                ApiError::Domain(err) => err.log_detail(),
                other => other.to_string(),
            };
            tracing::error!(status = status.as_u16(), "{}", detail);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
