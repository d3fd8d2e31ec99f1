//! Voice - capabilities granted to a browser voice client

/// VoiceGrant - who the token is for and which calls it may place or receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceGrant {
    pub identity: String,
    /// Application that handles calls placed with this token
    pub outgoing_application_sid: String,
    pub incoming_allow: bool,
}

impl VoiceGrant {
    /// Outgoing calls through `application_sid`, inbound calls allowed
    pub fn new(identity: impl Into<String>, application_sid: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            outgoing_application_sid: application_sid.into(),
            incoming_allow: true,
        }
    }
}
