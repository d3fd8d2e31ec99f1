//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Campaign: clinic brief and the generated ideas
//! - Prompt: the fixed campaign prompt template and generation parameters
//! - Voice: grants embedded in voice access tokens
//! - CallControl: what to do with an inbound call leg

mod call_control;
mod campaign;
mod prompt;
mod voice;

pub use call_control::*;
pub use campaign::*;
pub use prompt::*;
pub use voice::*;
