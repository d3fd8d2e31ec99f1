//! Value Objects
//!
//! Immutable types that describe domain concepts.

mod capability;

pub use capability::*;
