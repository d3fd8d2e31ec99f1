//! Campaign Routes - idea generation via the generative-language provider

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{CampaignRequest, CampaignResponse, ErrorResponse};
use crate::AppState;

use super::info::method_not_allowed;

/// Generate marketing campaign ideas for a clinic
#[utoipa::path(
    post,
    path = "/api/generate-campaign-ideas",
    request_body = CampaignRequest,
    responses(
        (status = 200, description = "Ideas generated", body = CampaignResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 429, description = "Upstream status mirrored", body = ErrorResponse),
        (status = 500, description = "Configuration error or empty generation", body = ErrorResponse),
        (status = 503, description = "Generation provider unreachable", body = ErrorResponse)
    ),
    tag = "Campaign"
)]
pub async fn generate_campaign_ideas(
    State(state): State<AppState>,
    payload: Result<Json<CampaignRequest>, JsonRejection>,
) -> Result<Json<CampaignResponse>, ApiError> {
    let Json(payload) = payload?;

    let ideas = state
        .campaign_service
        .generate_ideas(payload.clinic_name, payload.clinic_specialty)
        .await?;

    Ok(Json(CampaignResponse::from_domain(ideas)))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/generate-campaign-ideas",
        post(generate_campaign_ideas).fallback(method_not_allowed),
    )
}
