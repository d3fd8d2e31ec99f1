//! Campaign Application Service (Use Case)
//!
//! Turns a clinic brief into campaign ideas through the configured generator.

use std::sync::Arc;

use vocalis::{CampaignBrief, CampaignIdeas, DomainError, IdeaGenerator};

/// Application service for campaign idea generation
pub struct CampaignService {
    generator: Arc<dyn IdeaGenerator>,
    default_specialty: String,
}

impl CampaignService {
    pub fn new(generator: Arc<dyn IdeaGenerator>, default_specialty: impl Into<String>) -> Self {
        Self {
            generator,
            default_specialty: default_specialty.into(),
        }
    }

    /// Generate ideas for a clinic, substituting the default specialty if needed
    pub async fn generate_ideas(
        &self,
        clinic_name: String,
        clinic_specialty: Option<String>,
    ) -> Result<CampaignIdeas, DomainError> {
        let brief = CampaignBrief::new(clinic_name, clinic_specialty, &self.default_specialty)?;

        tracing::info!(
            "Generating campaign ideas for {} ({}) via {}",
            brief.clinic_name,
            brief.clinic_specialty,
            self.generator.model_id()
        );

        let ideas = self.generator.generate(&brief).await?;

        tracing::info!("Generated {} idea lines for {}", ideas.len(), brief.clinic_name);

        Ok(CampaignIdeas {
            clinic_name: brief.clinic_name,
            ideas,
        })
    }
}
