//! Prompt - the campaign idea prompt template

use super::campaign::CampaignBrief;

const SYSTEM_INSTRUCTION: &str = "You are a marketing expert for dental clinics in Latin America. \
Your task is to generate 3 creative and concise marketing campaign ideas that can be \
executed by an AI voice agent called Vocalis AI. The campaigns must be for outbound calls. \
Each idea must have a title in bold (using asterisks, e.g. **Campaign Title**) and a short \
description of 2-3 lines. Do not use any other formatting. \
Do not include introductions or conclusions.";

/// CampaignPrompt - system instruction plus the clinic-specific query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignPrompt {
    pub system_instruction: String,
    pub user_query: String,
}

impl CampaignPrompt {
    /// Interpolate the brief into the template. Values are inserted verbatim.
    pub fn for_brief(brief: &CampaignBrief) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_query: format!(
                "Generate 3 campaign ideas for a clinic called \"{}\" that specializes in \"{}\".",
                brief.clinic_name, brief.clinic_specialty
            ),
        }
    }
}

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}
