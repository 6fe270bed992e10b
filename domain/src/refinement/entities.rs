//! Refinement value objects
//!
//! All of these are transient. Persistence of [`HistoryRecord`] belongs to
//! the external store; this crate only shapes the row.

use crate::core::error::DomainError;
use crate::core::string::word_count;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// A validated request to rewrite a piece of text (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementRequest {
    text: String,
    mode_key: Option<String>,
}

impl RefinementRequest {
    /// Build a request, rejecting blank input before anything else runs.
    ///
    /// The text is kept verbatim (not trimmed); only blankness is checked.
    pub fn try_new(
        text: impl Into<String>,
        mode_key: Option<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText);
        }
        Ok(Self { text, mode_key })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The raw key the client sent, if any.
    pub fn mode_key(&self) -> Option<&str> {
        self.mode_key.as_deref()
    }

    /// The mode used for post-processing decisions (unknown keys → Standard).
    pub fn mode(&self) -> Mode {
        Mode::resolve_or_default(self.mode_key())
    }

    /// The label recorded in history: the raw key, or `"Standard"` when absent.
    pub fn tone_label(&self) -> &str {
        match self.mode_key() {
            Some(key) if !key.is_empty() => key,
            _ => Mode::Standard.label(),
        }
    }
}

/// Sanitized output of a successful refinement (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefinementResult {
    pub output_text: String,
    pub word_count: usize,
}

impl RefinementResult {
    pub fn new(output_text: impl Into<String>) -> Self {
        let output_text = output_text.into();
        let word_count = word_count(&output_text);
        Self {
            output_text,
            word_count,
        }
    }
}

/// Identity returned by the auth provider for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: Option<String>,
    /// Bearer token the user authenticated with; store writes run under it.
    #[serde(skip)]
    pub access_token: String,
}

/// Row written to the external history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub user_id: String,
    pub input_text: String,
    pub output_text: String,
    pub tone: String,
    pub word_count: usize,
}

impl HistoryRecord {
    pub fn from_refinement(
        user: &AuthenticatedUser,
        request: &RefinementRequest,
        result: &RefinementResult,
    ) -> Self {
        Self {
            user_id: user.id.clone(),
            input_text: request.text().to_string(),
            output_text: result.output_text.clone(),
            tone: request.tone_label().to_string(),
            word_count: result.word_count,
        }
    }
}

/// Identifier of a stored history row (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryId(String);

impl HistoryId {
    /// Any non-empty string is an id; the store decides whether it matches.
    pub fn try_new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::EmptyHistoryId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            id: "user-1".to_string(),
            email: Some("a@example.com".to_string()),
            access_token: "token".to_string(),
        }
    }

    #[test]
    fn test_blank_text_rejected() {
        for text in ["", " ", "\n\t  "] {
            assert_eq!(
                RefinementRequest::try_new(text, None),
                Err(DomainError::EmptyText)
            );
        }
    }

    #[test]
    fn test_text_kept_verbatim() {
        let req = RefinementRequest::try_new("  padded  ", None).unwrap();
        assert_eq!(req.text(), "  padded  ");
    }

    #[test]
    fn test_tone_label_defaults_to_standard() {
        let req = RefinementRequest::try_new("hello", None).unwrap();
        assert_eq!(req.tone_label(), "Standard");
        let req = RefinementRequest::try_new("hello", Some(String::new())).unwrap();
        assert_eq!(req.tone_label(), "Standard");
    }

    #[test]
    fn test_tone_label_keeps_unknown_key() {
        let req = RefinementRequest::try_new("hello", Some("Poetic".to_string())).unwrap();
        assert_eq!(req.tone_label(), "Poetic");
        assert_eq!(req.mode(), Mode::Standard);
    }

    #[test]
    fn test_result_word_count() {
        let result = RefinementResult::new("three little words");
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn test_history_record_fields() {
        let req = RefinementRequest::try_new("input", Some("LOWERCASE".to_string())).unwrap();
        let result = RefinementResult::new("output here");
        let record = HistoryRecord::from_refinement(&user(), &req, &result);
        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.input_text, "input");
        assert_eq!(record.output_text, "output here");
        assert_eq!(record.tone, "LOWERCASE");
        assert_eq!(record.word_count, 2);
    }

    #[test]
    fn test_history_record_serializes_store_columns() {
        let req = RefinementRequest::try_new("in", None).unwrap();
        let record = HistoryRecord::from_refinement(&user(), &req, &RefinementResult::new("out"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tone"], "Standard");
        assert_eq!(json["word_count"], 1);
        assert!(json.get("access_token").is_none());
    }

    #[test]
    fn test_history_id() {
        assert_eq!(HistoryId::try_new(""), Err(DomainError::EmptyHistoryId));
        assert_eq!(HistoryId::try_new("42").unwrap().as_str(), "42");
        assert_eq!(HistoryId::try_new("  ").unwrap().as_str(), "  ");
    }
}
