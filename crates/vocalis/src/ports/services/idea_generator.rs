//! Idea Generator Port
//!
//! Abstract interface for campaign idea generation.

use async_trait::async_trait;

use crate::domain::entities::{CampaignBrief, CampaignPrompt, GenerationParams};
use crate::domain::errors::DomainError;

/// Service interface for a generative-language provider
///
/// Implementations make exactly one outbound request per call and never
/// retry.
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    /// Send the prompt and return the first candidate's raw text
    async fn complete(
        &self,
        prompt: &CampaignPrompt,
        params: &GenerationParams,
    ) -> Result<String, DomainError>;

    /// Generate campaign ideas for a brief, one entry per non-empty line
    async fn generate(&self, brief: &CampaignBrief) -> Result<Vec<String>, DomainError> {
        let prompt = CampaignPrompt::for_brief(brief);
        let text = self.complete(&prompt, &GenerationParams::default()).await?;
        if text.trim().is_empty() {
            return Err(DomainError::EmptyGeneration);
        }
        Ok(crate::domain::split_ideas(&text))
    }

    /// Model identifier, for logging
    fn model_id(&self) -> &str;
}
