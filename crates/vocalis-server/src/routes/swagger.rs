//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CampaignRequest, CampaignResponse, ErrorResponse, HealthStatus, ServiceInfo, TokenRequest,
    TokenResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Info endpoints
        super::info::root,
        super::info::health_check,
        // Campaign endpoints
        super::campaign::generate_campaign_ideas,
        // Voice endpoints
        super::voice::get_twilio_token,
        super::voice::incoming_call,
    ),
    components(schemas(
        ServiceInfo,
        HealthStatus,
        ErrorResponse,
        CampaignRequest,
        CampaignResponse,
        TokenRequest,
        TokenResponse,
    )),
    tags(
        (name = "Info", description = "Service status"),
        (name = "Campaign", description = "Campaign idea generation"),
        (name = "Voice", description = "Voice tokens and call control"),
    ),
    info(
        title = "Vocalis AI Backend",
        description = "Campaign ideas with Gemini, voice tokens and call routing with Twilio",
    )
)]
pub struct ApiDoc;
