//! Twilio Access Token Issuer
//!
//! Builds Twilio Access Tokens (HS256 JWTs) carrying a Voice grant.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use vocalis::{Capability, DomainError, VoiceGrant, VoiceTokenIssuer};

use crate::config::TwilioSettings;

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of an issued token, matching the Twilio helper libraries
const TOKEN_TTL_SECS: i64 = 3600;

/// Content type Twilio expects in the JWT header
const TWILIO_CONTENT_TYPE: &str = "twilio-fpa;v=1";

/// Credentials that must all be present before a token can be signed
struct SigningCredentials<'a> {
    account_sid: &'a str,
    api_key: &'a str,
    api_secret: &'a str,
    app_sid: &'a str,
}

/// Twilio implementation of VoiceTokenIssuer
pub struct TwilioTokenIssuer {
    settings: TwilioSettings,
}

impl TwilioTokenIssuer {
    pub fn new(settings: TwilioSettings) -> Self {
        Self { settings }
    }

    fn credentials(&self) -> Result<SigningCredentials<'_>, DomainError> {
        let missing = || DomainError::Configuration(Capability::VoiceToken);
        Ok(SigningCredentials {
            account_sid: self.settings.account_sid.as_deref().ok_or_else(missing)?,
            api_key: self.settings.api_key.as_deref().ok_or_else(missing)?,
            api_secret: self.settings.api_secret.as_deref().ok_or_else(missing)?,
            app_sid: self.settings.app_sid.as_deref().ok_or_else(missing)?,
        })
    }

    /// Sign a token as of `issued_at` (unix seconds)
    fn issue_at(&self, identity: &str, issued_at: i64) -> Result<String, DomainError> {
        let creds = self.credentials()?;

        if identity.trim().is_empty() {
            return Err(DomainError::Validation(
                "identity must not be empty".to_string(),
            ));
        }

        let grant = VoiceGrant::new(identity, creds.app_sid);
        let header = TokenHeader {
            typ: "JWT",
            alg: "HS256",
            cty: TWILIO_CONTENT_TYPE,
        };
        let claims = AccessTokenClaims {
            jti: format!("{}-{}", creds.api_key, issued_at),
            iss: creds.api_key,
            sub: creds.account_sid,
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
            grants: Grants::from(&grant),
        };

        let signing_input = format!("{}.{}", encode_segment(&header)?, encode_segment(&claims)?);

        let mut mac = HmacSha256::new_from_slice(creds.api_secret.as_bytes())
            .map_err(|e| DomainError::internal(format!("Failed to initialize signer: {e}")))?;
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{signing_input}.{signature}"))
    }
}

impl VoiceTokenIssuer for TwilioTokenIssuer {
    fn issue(&self, identity: &str) -> Result<String, DomainError> {
        self.issue_at(identity, chrono::Utc::now().timestamp())
    }
}

// ============================================
// Token Types
// ============================================

#[derive(Serialize)]
struct TokenHeader {
    typ: &'static str,
    alg: &'static str,
    cty: &'static str,
}

#[derive(Serialize)]
struct AccessTokenClaims<'a> {
    jti: String,
    iss: &'a str,
    sub: &'a str,
    iat: i64,
    exp: i64,
    grants: Grants<'a>,
}

#[derive(Serialize)]
struct Grants<'a> {
    identity: &'a str,
    voice: VoiceClaims<'a>,
}

#[derive(Serialize)]
struct VoiceClaims<'a> {
    incoming: IncomingClaims,
    outgoing: OutgoingClaims<'a>,
}

#[derive(Serialize)]
struct IncomingClaims {
    allow: bool,
}

#[derive(Serialize)]
struct OutgoingClaims<'a> {
    application_sid: &'a str,
}

impl<'a> From<&'a VoiceGrant> for Grants<'a> {
    fn from(grant: &'a VoiceGrant) -> Self {
        Self {
            identity: &grant.identity,
            voice: VoiceClaims {
                incoming: IncomingClaims {
                    allow: grant.incoming_allow,
                },
                outgoing: OutgoingClaims {
                    application_sid: &grant.outgoing_application_sid,
                },
            },
        }
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, DomainError> {
    let json = serde_json::to_vec(value)
        .map_err(|e| DomainError::internal(format!("Failed to serialize token: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}
