//! Voice Routes - access tokens and the inbound call webhook

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{ErrorResponse, TokenRequest, TokenResponse};
use crate::AppState;

use super::info::method_not_allowed;

/// Issue a voice access token for a browser client
#[utoipa::path(
    post,
    path = "/api/get-twilio-token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Telephony credentials missing", body = ErrorResponse)
    ),
    tag = "Voice"
)]
pub async fn get_twilio_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload?;

    let token = state.voice_service.issue_token(&payload.identity)?;

    Ok(Json(TokenResponse {
        token,
        identity: payload.identity,
    }))
}

/// Telephony webhook for inbound calls. The callback body is ignored.
#[utoipa::path(
    post,
    path = "/api/voice/incoming",
    responses(
        (status = 200, description = "TwiML call-control document", content_type = "application/xml", body = String),
        (status = 500, description = "Caller id not configured", body = ErrorResponse)
    ),
    tag = "Voice"
)]
pub async fn incoming_call(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let twiml = state.voice_service.incoming_call_twiml()?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], twiml))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/get-twilio-token",
            post(get_twilio_token).fallback(method_not_allowed),
        )
        .route(
            "/api/voice/incoming",
            post(incoming_call).fallback(method_not_allowed),
        )
}
