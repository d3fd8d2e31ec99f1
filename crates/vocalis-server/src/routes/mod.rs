//! Vocalis API Routes
//!
//! - / and /health - Service info and health check
//! - /api/generate-campaign-ideas - Campaign ideas (Gemini)
//! - /api/get-twilio-token - Voice access tokens (Twilio)
//! - /api/voice/incoming - Inbound call webhook (TwiML)

pub mod campaign;
pub mod info;
pub mod swagger;
pub mod voice;
