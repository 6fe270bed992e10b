//! `POST /api/restore`

use crate::http::error::ApiError;
use crate::http::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequest {
    #[serde(default)]
    pub history_id: Option<Value>,
}

impl RestoreRequest {
    /// String ids pass through; numeric ids are rendered as text.
    pub fn history_id(&self) -> Option<String> {
        match self.history_id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub text: String,
}

pub async fn restore(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<RestoreResponse>, ApiError> {
    let request: RestoreRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let history_id = request.history_id();

    // Skip the auth round trip for requests that fail validation anyway
    let user = match history_id.as_deref() {
        Some(id) if !id.is_empty() => state.current_user(&headers).await,
        _ => None,
    };

    let text = state
        .restore
        .execute(history_id.as_deref(), user.as_ref())
        .await?;
    Ok(Json(RestoreResponse { text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(body: &str) -> Option<String> {
        serde_json::from_str::<RestoreRequest>(body).unwrap().history_id()
    }

    #[test]
    fn test_history_id_forms() {
        assert_eq!(id(r#"{"historyId":"abc"}"#).as_deref(), Some("abc"));
        assert_eq!(id(r#"{"historyId":42}"#).as_deref(), Some("42"));
        assert_eq!(id(r#"{"historyId":true}"#), None);
        assert_eq!(id("{}"), None);
    }
}
