//! Info Routes - liveness and health

use axum::{
    extract::State,
    http::{Method, Uri},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{HealthStatus, ServiceInfo};
use crate::AppState;

/// Welcome endpoint to verify the service is up
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service info", body = ServiceInfo)),
    tag = "Info"
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Vocalis AI Backend API".to_string(),
        status: "operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: state
            .config
            .configured_capabilities()
            .iter()
            .map(|capability| capability.as_str().to_string())
            .collect(),
    })
}

/// Health check for the hosting platform
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthStatus)),
    tag = "Info"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}

/// Fallback for unknown routes, rendered with the error envelope
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Method fallback for known routes, rendered with the error envelope
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/health", get(health_check).fallback(method_not_allowed))
}
