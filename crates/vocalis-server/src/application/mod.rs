//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the domain and the provider adapters.

mod campaign_service;
mod voice_service;

pub use campaign_service::CampaignService;
pub use voice_service::VoiceService;
