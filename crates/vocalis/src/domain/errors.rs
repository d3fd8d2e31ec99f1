//! Domain Errors
//!
//! One taxonomy for every component. Transport concerns (status codes,
//! JSON envelopes) are applied by the server at the handler boundary.

use thiserror::Error;

use super::value_objects::Capability;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A credential required by a capability is missing.
    #[error("Server configuration error: {0} is not configured")]
    Configuration(Capability),

    /// The external provider answered with a non-success status.
    #[error("Upstream provider error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The external provider could not be reached (connect, timeout).
    #[error("Upstream provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("The generation provider returned no content")]
    EmptyGeneration,

    /// Unexpected failure. The detail is for logs only and never leaves the server.
    #[error("Internal server error")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn upstream<T: Into<String>>(status: u16, message: T) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn internal<T: std::fmt::Display>(detail: T) -> Self {
        Self::Internal(detail.to_string())
    }

    /// Detail worth logging, which may differ from the client-facing text.
    pub fn log_detail(&self) -> String {
        match self {
            Self::Internal(detail) => format!("Internal server error: {detail}"),
            other => other.to_string(),
        }
    }
}
