use anyhow::Context;
use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{GeminiIdeaGenerator, TwilioTokenIssuer};
use application::{CampaignService, VoiceService};
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub campaign_service: Arc<CampaignService>,
    pub voice_service: Arc<VoiceService>,
}

impl AppState {
    /// Wire the provider adapters from configuration
    pub fn from_config(config: AppConfig, client: reqwest::Client) -> Self {
        let generator = Arc::new(GeminiIdeaGenerator::new(client, config.gemini.clone()));
        let issuer = Arc::new(TwilioTokenIssuer::new(config.twilio.clone()));

        Self {
            campaign_service: Arc::new(CampaignService::new(
                generator,
                config.default_specialty.clone(),
            )),
            voice_service: Arc::new(VoiceService::new(
                issuer,
                config.twilio.dial_instruction(),
            )),
            config: Arc::new(config),
        }
    }
}

/// Allow-listed origins with credentials; methods and headers mirror the request
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .merge(routes::info::router())
        .merge(routes::campaign::router())
        .merge(routes::voice::router())
        .fallback(routes::info::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Local development keeps credentials in .env; deployments use the real environment
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!(".env not loaded ({}), using process environment", e),
    }

    tracing::info!("Vocalis API initializing...");

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    for capability in vocalis::Capability::ALL {
        if config.configured_capabilities().contains(&capability) {
            tracing::info!("{} enabled", capability);
        } else {
            tracing::warn!("{} disabled - credentials missing", capability);
        }
    }

    let client = reqwest::Client::builder()
        .timeout(config.gemini.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let bind_address = config.bind_address();
    let router = build_router(AppState::from_config(config, client));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Swagger UI: /docs");
    tracing::info!("Vocalis API listening on {}", bind_address);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tower::ServiceExt;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
    }

    fn voice_config() -> Vec<(&'static str, &'static str)> {
        vec![
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_API_KEY", "SK123"),
            ("TWILIO_API_SECRET", "secret"),
            ("TWILIO_APP_SID", "AP123"),
            ("TWILIO_CALLER_ID", "+15550100"),
        ]
    }

    fn app(pairs: &[(&str, &str)]) -> Router {
        build_router(AppState::from_config(
            test_config(pairs),
            reqwest::Client::new(),
        ))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn assert_error_envelope(bytes: &[u8]) -> String {
        let body: Value = serde_json::from_slice(bytes).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2, "unexpected envelope: {body}");
        assert_eq!(object["success"], false);
        let message = object["message"].as_str().unwrap().to_string();
        assert!(!message.is_empty());
        message
    }

    async fn gemini_mock(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_root_lists_configured_features() {
        let (status, bytes) = send(
            app(&voice_config()),
            Request::get("/").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "operational");
        assert_eq!(body["features"], json!(["voice-token", "voice-webhook"]));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, bytes) = send(app(&[]), Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_generate_campaign_ideas() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("general dentistry"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "**A**\nline1\n\n  \n**B**\nline2" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let router = app(&[("GEMINI_API_KEY", "k"), ("GEMINI_BASE_URL", uri.as_str())]);
        let (status, bytes) = send(
            router,
            post_json("/api/generate-campaign-ideas", json!({ "clinic_name": "Sonrisas" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "ideas": ["**A**", "line1", "**B**", "line2"],
                "clinic_name": "Sonrisas"
            })
        );
    }

    #[tokio::test]
    async fn test_no_candidates_maps_to_500() {
        let server = gemini_mock(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] }))).await;
        let uri = server.uri();
        let router = app(&[("GEMINI_API_KEY", "k"), ("GEMINI_BASE_URL", uri.as_str())]);

        let (status, bytes) = send(
            router,
            post_json("/api/generate-campaign-ideas", json!({ "clinic_name": "Sonrisas" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_error_envelope(&bytes);
    }

    #[tokio::test]
    async fn test_upstream_429_is_mirrored() {
        let server = gemini_mock(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Quota exceeded for requests per minute" }
        })))
        .await;
        let uri = server.uri();
        let router = app(&[("GEMINI_API_KEY", "k"), ("GEMINI_BASE_URL", uri.as_str())]);

        let (status, bytes) = send(
            router,
            post_json("/api/generate-campaign-ideas", json!({ "clinic_name": "Sonrisas" })),
        )
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        let message = assert_error_envelope(&bytes);
        assert!(message.contains("Quota exceeded for requests per minute"));
    }

    #[tokio::test]
    async fn test_missing_gemini_key_is_500() {
        let (status, bytes) = send(
            app(&[]),
            post_json("/api/generate-campaign-ideas", json!({ "clinic_name": "Sonrisas" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = assert_error_envelope(&bytes);
        assert!(message.contains("campaign idea generation"));
    }

    #[tokio::test]
    async fn test_missing_clinic_name_uses_envelope() {
        let (status, bytes) = send(
            app(&[("GEMINI_API_KEY", "k")]),
            post_json("/api/generate-campaign-ideas", json!({ "clinic_specialty": "implants" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&bytes);
    }

    #[tokio::test]
    async fn test_malformed_json_is_422() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/generate-campaign-ideas")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, bytes) = send(app(&[("GEMINI_API_KEY", "k")]), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&bytes);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_422() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/get-twilio-token")
            .body(Body::from("{}"))
            .unwrap();

        let (status, bytes) = send(app(&voice_config()), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&bytes);
    }

    #[tokio::test]
    async fn test_wrong_method_uses_envelope() {
        let requests = [
            (Method::GET, "/api/generate-campaign-ideas"),
            (Method::GET, "/api/get-twilio-token"),
            (Method::GET, "/api/voice/incoming"),
            (Method::POST, "/health"),
            (Method::DELETE, "/"),
        ];

        for (method, uri) in requests {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let (status, bytes) = send(app(&voice_config()), request).await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
            let message = assert_error_envelope(&bytes);
            assert!(message.contains(uri));
        }
    }

    #[tokio::test]
    async fn test_token_issued_and_identity_echoed() {
        let (status, bytes) = send(
            app(&voice_config()),
            post_json("/api/get-twilio-token", json!({ "identity": "agent-1" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["identity"], "agent-1");
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_token_without_credentials_is_500() {
        for identity in ["agent-1", "other", ""] {
            let (status, bytes) = send(
                app(&[]),
                post_json("/api/get-twilio-token", json!({ "identity": identity })),
            )
            .await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            let message = assert_error_envelope(&bytes);
            assert!(!message.contains("secret"));
        }
    }

    #[tokio::test]
    async fn test_incoming_call_ignores_body() {
        let mut documents = Vec::new();
        for body in ["", "CallSid=CA1&From=%2B15551234", "garbage"] {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/api/voice/incoming")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap();
            let response = app(&voice_config()).oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/xml"
            );
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            documents.push(String::from_utf8(bytes.to_vec()).unwrap());
        }

        assert!(documents.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(documents[0].contains("<Dial callerId=\"+15550100\">"));
    }

    #[tokio::test]
    async fn test_unknown_route_uses_envelope() {
        let (status, bytes) = send(app(&[]), Request::get("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error_envelope(&bytes);
    }

    #[tokio::test]
    async fn test_cors_allows_listed_origin_only() {
        let preflight = |origin: &str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/generate-campaign-ideas")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap()
        };

        let response = app(&[])
            .oneshot(preflight("https://vocalisia.web.app"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://vocalisia.web.app"
        );

        let response = app(&[])
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
