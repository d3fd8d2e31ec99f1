//! Server configuration
//!
//! Loaded once at startup from the process environment (optionally seeded
//! from a local `.env`) and shared read-only afterwards. Provider
//! credentials are optional here; a missing one surfaces as a
//! configuration error when the feature that needs it is used.

use anyhow::Context;
use std::time::Duration;

use vocalis::{Capability, DialInstruction, DEFAULT_CLINIC_SPECIALTY};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "https://vocalisia.web.app",
    "https://vocalisia.firebaseapp.com",
    "http://localhost:5000",
    "http://127.0.0.1:5000",
];

/// Generative-language provider settings
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Telephony provider settings
#[derive(Debug, Clone, Default)]
pub struct TwilioSettings {
    pub account_sid: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// TwiML application that handles outgoing browser calls
    pub app_sid: Option<String>,
    pub caller_id: Option<String>,
    pub dial_number: Option<String>,
}

impl TwilioSettings {
    pub fn has_token_credentials(&self) -> bool {
        self.account_sid.is_some()
            && self.api_key.is_some()
            && self.api_secret.is_some()
            && self.app_sid.is_some()
    }

    /// Dial target for inbound calls, if a caller id is provisioned
    pub fn dial_instruction(&self) -> Option<DialInstruction> {
        self.caller_id
            .as_ref()
            .map(|caller_id| DialInstruction::new(caller_id.clone(), self.dial_number.clone()))
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub default_specialty: String,
    pub gemini: GeminiSettings,
    pub twilio: TwilioSettings,
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_allowed_origins,
            default_specialty: get("DEFAULT_CLINIC_SPECIALTY")
                .unwrap_or_else(|| DEFAULT_CLINIC_SPECIALTY.to_string()),
            gemini: GeminiSettings {
                api_key: get("GEMINI_API_KEY"),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
                timeout: PROVIDER_TIMEOUT,
            },
            twilio: TwilioSettings {
                account_sid: get("TWILIO_ACCOUNT_SID"),
                api_key: get("TWILIO_API_KEY"),
                api_secret: get("TWILIO_API_SECRET"),
                app_sid: get("TWILIO_APP_SID"),
                caller_id: get("TWILIO_CALLER_ID"),
                dial_number: get("TWILIO_DIAL_NUMBER"),
            },
        })
    }

    /// Capabilities whose credentials are present
    pub fn configured_capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| match capability {
                Capability::CampaignIdeas => self.gemini.api_key.is_some(),
                Capability::VoiceToken => self.twilio.has_token_credentials(),
                Capability::VoiceWebhook => self.twilio.caller_id.is_some(),
            })
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
