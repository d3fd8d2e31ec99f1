//! Voice DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request for a browser voice-client access token
#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[schema(example = "agent-1")]
    pub identity: String,
}

/// Signed access token for the voice client
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Opaque, short-lived bearer credential
    pub token: String,
    pub identity: String,
}
