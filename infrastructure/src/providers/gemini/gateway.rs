//! Gemini gateway: one `generateContent` call per prompt.

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use reconstruct_application::ports::llm_gateway::{GatewayError, LlmGateway};
use reconstruct_domain::core::string::truncate;
use reconstruct_domain::{GenerationResponse, Model};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GeminiGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiGateway {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a gateway if a key is available.
    ///
    /// Returns `None` when the key is missing or the client cannot be built;
    /// the caller keeps running with reconstruct disabled.
    pub fn try_new(api_key: Option<String>, base_url: &str) -> Option<Self> {
        let Some(api_key) = api_key else {
            warn!("Gemini API key not configured; reconstruct is disabled");
            return None;
        };
        match Self::new(api_key, base_url) {
            Ok(gateway) => {
                info!(base_url = %gateway.base_url, "Gemini provider initialized");
                Some(gateway)
            }
            Err(e) => {
                warn!("Gemini provider not available: {}", e);
                None
            }
        }
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
    ) -> Result<GenerationResponse, GatewayError> {
        debug!(model = %model, prompt_bytes = prompt.len(), "Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&body)
                .map(|envelope| match envelope.error.status {
                    Some(code) => format!("{} ({})", envelope.error.message, code),
                    None => envelope.error.message,
                })
                .unwrap_or_else(|_| truncate(&String::from_utf8_lossy(&body), 200));
            warn!(status = status.as_u16(), "Gemini request failed: {}", message);

            return Err(if status == StatusCode::NOT_FOUND {
                GatewayError::ModelNotAvailable(format!("{}: {}", model, message))
            } else {
                GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), message))
            });
        }

        let wire: GenerateContentResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Unreadable Gemini response body: {}", e);
            GatewayError::NoResponse
        })?;

        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::Json;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::post;
    use serde_json::{Value, json};

    async fn echo_prompt(headers: HeaderMap, Json(body): Json<Value>) -> (AxumStatus, Json<Value>) {
        if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
            return (
                AxumStatus::FORBIDDEN,
                Json(json!({"error": {"code": 403, "message": "bad key", "status": "PERMISSION_DENIED"}})),
            );
        }
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
        (
            AxumStatus::OK,
            Json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": format!("echo: {prompt}")}]},
                    "finishReason": "STOP"
                }]
            })),
        )
    }

    async fn gateway_for(router: Router, key: &str) -> GeminiGateway {
        let base_url = serve(router).await;
        GeminiGateway::new(key, &base_url).unwrap()
    }

    #[tokio::test]
    async fn test_generate_success() {
        let router = Router::new().route("/v1beta/models/:call", post(echo_prompt));
        let gateway = gateway_for(router, "test-key").await;

        let response = gateway.generate(&Model::default(), "hi").await.unwrap();
        assert_eq!(response.text().unwrap(), "echo: hi");
    }

    #[tokio::test]
    async fn test_error_envelope_message() {
        let router = Router::new().route("/v1beta/models/:call", post(echo_prompt));
        let gateway = gateway_for(router, "wrong-key").await;

        let err = gateway.generate(&Model::default(), "hi").await.unwrap_err();
        match err {
            GatewayError::RequestFailed(msg) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("bad key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_model_is_not_available() {
        // No routes: every path is a 404
        let gateway = gateway_for(Router::new(), "test-key").await;
        let err = gateway
            .generate(&Model::Custom("nope".to_string()), "hi")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ModelNotAvailable(_)));
    }

    #[tokio::test]
    async fn test_unreadable_body_is_no_response() {
        let router = Router::new().route("/v1beta/models/:call", post(|| async { "not json" }));
        let gateway = gateway_for(router, "test-key").await;
        let err = gateway.generate(&Model::default(), "hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::NoResponse));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = GeminiGateway::new("k", &format!("http://{addr}")).unwrap();
        let err = gateway.generate(&Model::default(), "hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[test]
    fn test_try_new_without_key() {
        assert!(GeminiGateway::try_new(None, DEFAULT_BASE_URL).is_none());
    }

    #[test]
    fn test_endpoint_format() {
        let gateway = GeminiGateway::new("k", "https://example.test/").unwrap();
        assert_eq!(
            gateway.endpoint(&Model::Gemini25Flash),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
