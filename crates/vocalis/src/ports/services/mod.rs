//! Service Ports
//!
//! Abstract interfaces for external services.

mod idea_generator;
mod voice_token;

pub use idea_generator::*;
pub use voice_token::*;
