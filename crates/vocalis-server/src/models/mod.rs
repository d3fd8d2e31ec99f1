//! Vocalis API Models
//!
//! - Campaign: idea generation request/response
//! - Voice: access token request/response
//! - Info: service status and the shared error envelope

mod campaign;
mod info;
mod voice;

pub use campaign::*;
pub use info::*;
pub use voice::*;
