//! [`RefinementApi`] over HTTP.

use async_trait::async_trait;
use reconstruct_application::ports::refinement_api::{
    ClientError, ReconstructOutcome, RefinementApi,
};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

pub const RECONSTRUCT_PATH: &str = "/api/reconstruct";

/// Long enough to cover the server's own bound on the model call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ReconstructBody<'a> {
    text: &'a str,
    mode: &'a str,
}

pub struct HttpRefinementApi {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpRefinementApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    /// Send requests on behalf of a signed-in user.
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RECONSTRUCT_PATH)
    }
}

#[async_trait]
impl RefinementApi for HttpRefinementApi {
    async fn reconstruct(
        &self,
        text: &str,
        mode: &str,
    ) -> Result<ReconstructOutcome, ClientError> {
        let mut request = self.http.post(self.endpoint()).json(&ReconstructBody { text, mode });
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        debug!(status, body_bytes = body.len(), "Reconstruct response received");

        Ok(ReconstructOutcome::from_http(status, &body))
    }
}
