//! Voice Application Service (Use Case)
//!
//! Token issuance for browser voice clients and routing for inbound calls.

use std::sync::Arc;

use vocalis::{Capability, DialInstruction, DomainError, VoiceTokenIssuer};

use crate::adapters::twiml;

/// Application service for voice operations
pub struct VoiceService {
    issuer: Arc<dyn VoiceTokenIssuer>,
    dial: Option<DialInstruction>,
}

impl VoiceService {
    pub fn new(issuer: Arc<dyn VoiceTokenIssuer>, dial: Option<DialInstruction>) -> Self {
        Self { issuer, dial }
    }

    /// Issue an access token for `identity`
    pub fn issue_token(&self, identity: &str) -> Result<String, DomainError> {
        let token = self.issuer.issue(identity)?;
        tracing::info!("Issued voice token for {}", identity);
        Ok(token)
    }

    /// TwiML for an inbound call. Identical for every request.
    pub fn incoming_call_twiml(&self) -> Result<String, DomainError> {
        let dial = self
            .dial
            .as_ref()
            .ok_or(DomainError::Configuration(Capability::VoiceWebhook))?;
        Ok(twiml::render_dial(dial))
    }
}
