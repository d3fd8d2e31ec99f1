//! Vocalis Domain Library
//!
//! Core domain types and interfaces for the Vocalis AI relay.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Campaign briefs, prompts, voice grants, call control
//!   - `value_objects/`: Immutable value types (Capability)
//!   - `errors/`: The error taxonomy shared by every component
//!
//! - **Ports** (`ports/`): Abstract interfaces implemented by the server
//!   - `services/`: Idea generation and voice token issuance
//!
//! # Usage
//!
//! ```rust,ignore
//! use vocalis::{CampaignBrief, IdeaGenerator, DomainError};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    split_ideas, CampaignBrief, CampaignIdeas, CampaignPrompt, Capability, DialInstruction,
    DomainError, GenerationParams, VoiceGrant, DEFAULT_CLINIC_SPECIALTY,
};
pub use ports::{IdeaGenerator, VoiceTokenIssuer};
