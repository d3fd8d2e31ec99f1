//! Campaign DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vocalis::CampaignIdeas;

/// Request to generate campaign ideas for a clinic
#[derive(Debug, Deserialize, ToSchema)]
pub struct CampaignRequest {
    /// Clinic name, interpolated verbatim into the prompt
    #[schema(example = "Clínica Dental Sonrisas")]
    pub clinic_name: String,
    /// Clinic specialty (defaults to the configured specialty)
    #[serde(default)]
    #[schema(example = "orthodontics")]
    pub clinic_specialty: Option<String>,
}

/// Generated campaign ideas, one entry per non-empty line
#[derive(Debug, Serialize, ToSchema)]
pub struct CampaignResponse {
    pub success: bool,
    pub ideas: Vec<String>,
    pub clinic_name: String,
}

impl CampaignResponse {
    pub fn from_domain(ideas: CampaignIdeas) -> Self {
        Self {
            success: true,
            ideas: ideas.ideas,
            clinic_name: ideas.clinic_name,
        }
    }
}
