//! Gemini Idea Generator
//!
//! Calls Gemini's `generateContent` endpoint once per request and returns
//! the first candidate's text.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use vocalis::{CampaignPrompt, Capability, DomainError, GenerationParams, IdeaGenerator};

use crate::config::GeminiSettings;

/// Gemini implementation of IdeaGenerator
#[derive(Clone)]
pub struct GeminiIdeaGenerator {
    client: Client,
    settings: GeminiSettings,
}

impl GeminiIdeaGenerator {
    pub fn new(client: Client, settings: GeminiSettings) -> Self {
        Self { client, settings }
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/{model}:generateContent?key={api_key}",
            self.settings.base_url,
            model = self.settings.model,
        )
    }
}

#[async_trait]
impl IdeaGenerator for GeminiIdeaGenerator {
    async fn complete(
        &self,
        prompt: &CampaignPrompt,
        params: &GenerationParams,
    ) -> Result<String, DomainError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(DomainError::Configuration(Capability::CampaignIdeas))?;

        let request = GenerateContentRequest::new(prompt, params);

        let response = self
            .client
            .post(self.endpoint(api_key))
            .timeout(self.settings.timeout)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let body = response.bytes().await.map_err(|err| {
            DomainError::UpstreamUnavailable(format!(
                "Failed to read Gemini response: {}",
                err.without_url()
            ))
        })?;

        let payload: Value = serde_json::from_slice(&body)
            .map_err(|err| DomainError::internal(format!("Invalid Gemini response: {err}")))?;

        extract_first_text(&payload).ok_or(DomainError::EmptyGeneration)
    }

    fn model_id(&self) -> &str {
        &self.settings.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: &CampaignPrompt, params: &GenerationParams) -> Self {
        Self {
            contents: vec![Content::text(&prompt.user_query)],
            system_instruction: Content::text(&prompt.system_instruction),
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_k: params.top_k,
                top_p: params.top_p,
                max_output_tokens: params.max_output_tokens,
            },
        }
    }
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

// ============================================
// Helper Functions
// ============================================

/// `candidates[0].content.parts[0].text`, if present and non-empty
fn extract_first_text(root: &Value) -> Option<String> {
    root.get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

// URLs carry the API key, so they are stripped before anything is reported.
fn map_send_error(err: reqwest::Error) -> DomainError {
    let err = err.without_url();
    if err.is_builder() {
        return DomainError::internal(format!("Failed to build Gemini request: {err}"));
    }
    DomainError::UpstreamUnavailable(format!("Could not reach the Gemini API: {err}"))
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::upstream(status.as_u16(), format!("Gemini API error: {message}"))
}
