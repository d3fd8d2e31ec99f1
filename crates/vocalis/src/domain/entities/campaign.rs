//! Campaign - clinic brief in, campaign ideas out
//!
//! Pure domain entity without infrastructure dependencies.

use crate::domain::errors::DomainError;

/// Specialty used when the client does not name one
pub const DEFAULT_CLINIC_SPECIALTY: &str = "general dentistry";

/// CampaignBrief - validated input for idea generation
///
/// `clinic_specialty` always holds a value: blank or missing input is
/// replaced by the configured default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignBrief {
    pub clinic_name: String,
    pub clinic_specialty: String,
}

impl CampaignBrief {
    /// Build a brief, substituting `default_specialty` when none is given
    pub fn new(
        clinic_name: impl Into<String>,
        clinic_specialty: Option<String>,
        default_specialty: &str,
    ) -> Result<Self, DomainError> {
        let clinic_name = clinic_name.into();
        if clinic_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "clinic_name must not be empty".to_string(),
            ));
        }

        let clinic_specialty = clinic_specialty
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| default_specialty.to_string());

        Ok(Self {
            clinic_name,
            clinic_specialty,
        })
    }
}

/// CampaignIdeas - ordered, non-empty lines produced for a clinic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignIdeas {
    pub clinic_name: String,
    pub ideas: Vec<String>,
}

/// Split generated text into trimmed, non-empty lines, keeping their order
pub fn split_ideas(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
