//! Wire types for `generateContent` and their conversion to domain types.

use reconstruct_domain::{Candidate, FinishReason, GenerationResponse};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single-turn request carrying one text part.
    pub fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<WireCandidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireCandidate {
    pub content: Option<WireContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WireContent {
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WirePart {
    /// Absent for non-text parts (inline data, function calls)
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

// ─── Wire → Domain ───────────────────────────────────────────────

/// Convert a Gemini finish reason to the domain one.
///
/// `FINISH_REASON_UNSPECIFIED` carries no information and maps to `None`.
pub fn convert_finish_reason(reason: &str) -> Option<FinishReason> {
    match reason {
        "STOP" => Some(FinishReason::Stop),
        "MAX_TOKENS" => Some(FinishReason::MaxTokens),
        "SAFETY" => Some(FinishReason::Safety),
        "RECITATION" => Some(FinishReason::Recitation),
        "FINISH_REASON_UNSPECIFIED" => None,
        other => Some(FinishReason::Other(other.to_string())),
    }
}

impl From<GenerateContentResponse> for GenerationResponse {
    fn from(wire: GenerateContentResponse) -> Self {
        let candidates = wire
            .candidates
            .into_iter()
            .map(|c| Candidate {
                parts: c
                    .content
                    .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
                    .unwrap_or_default(),
                finish_reason: c.finish_reason.as_deref().and_then(convert_finish_reason),
            })
            .collect();

        GenerationResponse {
            candidates,
            prompt_block_reason: wire
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .filter(|r| !r.is_empty() && r != "BLOCK_REASON_UNSPECIFIED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reconstruct_domain::ExtractionFailure;

    fn parse(json: &str) -> GenerationResponse {
        serde_json::from_str::<GenerateContentResponse>(json)
            .unwrap()
            .into()
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::from_prompt("hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_text_response() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "world"}]},
                    "finishReason": "STOP",
                    "index": 0
                }],
                "usageMetadata": {"promptTokenCount": 5}
            }"#,
        );
        assert_eq!(response.text().unwrap(), "Hello, world");
    }

    #[test]
    fn test_blocked_prompt() {
        let response = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        assert_eq!(
            response.text(),
            Err(ExtractionFailure::PromptBlocked("SAFETY".to_string()))
        );
    }

    #[test]
    fn test_safety_finish_withholds_candidate() {
        let response = parse(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#);
        assert_eq!(
            response.text(),
            Err(ExtractionFailure::CandidateWithheld(FinishReason::Safety))
        );
    }

    #[test]
    fn test_empty_object_has_no_text() {
        assert_eq!(parse("{}").text().unwrap(), "");
    }

    #[test]
    fn test_unknown_finish_reason() {
        assert_eq!(
            convert_finish_reason("BLOCKLIST"),
            Some(FinishReason::Other("BLOCKLIST".to_string()))
        );
        assert_eq!(convert_finish_reason("FINISH_REASON_UNSPECIFIED"), None);
    }
}
