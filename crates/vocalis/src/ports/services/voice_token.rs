//! Voice Token Port
//!
//! Abstract interface for issuing voice-call access tokens.

use crate::domain::errors::DomainError;

/// Signs short-lived bearer tokens for browser voice clients
///
/// Implementations embed a [`VoiceGrant`](crate::VoiceGrant) for `identity`
/// and fail with [`DomainError::Configuration`] when credentials are missing.
pub trait VoiceTokenIssuer: Send + Sync {
    fn issue(&self, identity: &str) -> Result<String, DomainError>;
}
