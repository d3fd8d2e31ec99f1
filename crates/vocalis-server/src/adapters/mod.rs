//! Infrastructure Adapters
//!
//! Implementations of domain ports for external providers.

pub mod gemini;
pub mod twilio_token;
pub mod twiml;

// Re-exports
pub use gemini::GeminiIdeaGenerator;
pub use twilio_token::TwilioTokenIssuer;
