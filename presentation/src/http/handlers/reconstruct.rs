//! `POST /api/reconstruct`

use crate::http::error::ApiError;
use crate::http::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use reconstruct_application::ReconstructInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ReconstructRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Anything but a string falls back to the default mode.
    #[serde(default)]
    pub mode: Option<Value>,
}

impl ReconstructRequest {
    pub fn mode_key(&self) -> Option<String> {
        self.mode.as_ref().and_then(Value::as_str).map(str::to_owned)
    }
}

#[derive(Debug, Serialize)]
pub struct ReconstructResponse {
    pub text: String,
}

/// The body is parsed regardless of `Content-Type`.
pub async fn reconstruct(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ReconstructResponse>, ApiError> {
    let request: ReconstructRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Internal(format!("Failed to process text: {}", e)))?;
    let user = state.current_user(&headers).await;

    let mode = request.mode_key();
    let input = ReconstructInput::new(request.text.unwrap_or_default(), mode).with_user(user);
    let result = state.reconstruct.execute(input).await?;

    Ok(Json(ReconstructResponse {
        text: result.output_text,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ReconstructRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_mode_key_only_from_strings() {
        assert_eq!(parse(r#"{"mode":"Academic"}"#).mode_key().as_deref(), Some("Academic"));
        assert_eq!(parse(r#"{"mode":5}"#).mode_key(), None);
        assert_eq!(parse(r#"{"mode":null}"#).mode_key(), None);
        assert_eq!(parse(r#"{"mode":["Academic"]}"#).mode_key(), None);
        assert_eq!(parse("{}").mode_key(), None);
    }
}
