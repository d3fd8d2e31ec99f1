//! Capability - features that depend on provider credentials

/// A relay feature backed by an external provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CampaignIdeas,
    VoiceToken,
    VoiceWebhook,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::CampaignIdeas,
        Capability::VoiceToken,
        Capability::VoiceWebhook,
    ];

    /// Stable identifier used in the service info endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CampaignIdeas => "campaign-ideas",
            Capability::VoiceToken => "voice-token",
            Capability::VoiceWebhook => "voice-webhook",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::CampaignIdeas => write!(f, "campaign idea generation"),
            Capability::VoiceToken => write!(f, "voice token issuance"),
            Capability::VoiceWebhook => write!(f, "voice call routing"),
        }
    }
}
