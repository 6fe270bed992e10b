//! Refinement API port (client side)
//!
//! The workspace driver talks to a reconstruct endpoint through this port.
//! Response bodies are never trusted to be well formed: every HTTP exchange
//! is folded into a [`ReconstructOutcome`].

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not reach the server: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,
}

/// What a reconstruct call came back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructOutcome {
    Success { text: String },
    Failure { error: String },
}

impl ReconstructOutcome {
    /// Interpret a status code and raw body.
    ///
    /// - non-2xx: the body's string `error` field, else a generic message
    /// - 2xx: the body's string `text` field, else a failure
    pub fn from_http(status: u16, body: &[u8]) -> Self {
        let json: Option<Value> = serde_json::from_slice(body).ok();
        let field = |name: &str| {
            json.as_ref()
                .and_then(|v| v.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        if !(200..300).contains(&status) {
            let error = field("error")
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| format!("Failed to process text: {}", status));
            return ReconstructOutcome::Failure { error };
        }

        match field("text") {
            Some(text) if !text.is_empty() => ReconstructOutcome::Success { text },
            _ => ReconstructOutcome::Failure {
                error: "No text returned from API".to_string(),
            },
        }
    }
}

/// Client for a remote reconstruct endpoint.
#[async_trait]
pub trait RefinementApi: Send + Sync {
    async fn reconstruct(
        &self,
        text: &str,
        mode: &str,
    ) -> Result<ReconstructOutcome, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        assert_eq!(
            ReconstructOutcome::from_http(200, br#"{"text":"hello"}"#),
            ReconstructOutcome::Success {
                text: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_success_without_text_is_failure() {
        let bodies: [&[u8]; 4] = [br#"{}"#, br#"{"text":42}"#, br#"{"text":""}"#, b"not json"];
        for body in bodies {
            assert_eq!(
                ReconstructOutcome::from_http(200, body),
                ReconstructOutcome::Failure {
                    error: "No text returned from API".to_string()
                }
            );
        }
    }

    #[test]
    fn test_error_body_message_surfaced() {
        assert_eq!(
            ReconstructOutcome::from_http(400, br#"{"error":"Text is required"}"#),
            ReconstructOutcome::Failure {
                error: "Text is required".to_string()
            }
        );
    }

    #[test]
    fn test_error_without_body_is_generic() {
        assert_eq!(
            ReconstructOutcome::from_http(502, b"<html>bad gateway</html>"),
            ReconstructOutcome::Failure {
                error: "Failed to process text: 502".to_string()
            }
        );
    }
}
