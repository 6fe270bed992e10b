//! Generation response value object.
//!
//! Adapters translate provider payloads into [`GenerationResponse`]; the
//! reconstruct use case only ever asks it for [`text()`](GenerationResponse::text).
//!
//! # Examples
//!
//! ```
//! use reconstruct_domain::generation::{GenerationResponse, FinishReason};
//!
//! let response = GenerationResponse::from_text("Hello!");
//! assert_eq!(response.text().unwrap(), "Hello!");
//!
//! let blocked = GenerationResponse::blocked("SAFETY");
//! assert!(blocked.text().is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the model stopped producing a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Natural end of output
    Stop,
    /// Hit the output token limit; text may be truncated but is usable
    MaxTokens,
    /// Withheld by a safety filter
    Safety,
    /// Withheld for reciting source material
    Recitation,
    /// Provider-specific reason
    Other(String),
}

impl FinishReason {
    /// Whether text from a candidate with this reason may be used.
    pub fn is_usable(&self) -> bool {
        matches!(self, FinishReason::Stop | FinishReason::MaxTokens)
    }
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub parts: Vec<String>,
    pub finish_reason: Option<FinishReason>,
}

/// Text could not be read out of a response that did arrive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionFailure {
    #[error("Prompt was blocked: {0}")]
    PromptBlocked(String),

    #[error("Candidate was withheld: {0:?}")]
    CandidateWithheld(FinishReason),
}

/// A structured response from a generation model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub candidates: Vec<Candidate>,
    /// Set when the provider refused the prompt itself
    pub prompt_block_reason: Option<String>,
}

impl GenerationResponse {
    /// Wrap a plain string as a single finished candidate.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                parts: vec![text.into()],
                finish_reason: Some(FinishReason::Stop),
            }],
            prompt_block_reason: None,
        }
    }

    /// A response whose prompt was refused.
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self {
            candidates: Vec::new(),
            prompt_block_reason: Some(reason.into()),
        }
    }

    /// Concatenated text of the first candidate.
    ///
    /// No candidates yields an empty string; a blocked prompt or a withheld
    /// candidate is an error.
    pub fn text(&self) -> Result<String, ExtractionFailure> {
        if let Some(reason) = &self.prompt_block_reason {
            return Err(ExtractionFailure::PromptBlocked(reason.clone()));
        }
        let Some(first) = self.candidates.first() else {
            return Ok(String::new());
        };
        if let Some(reason) = &first.finish_reason
            && !reason.is_usable()
        {
            return Err(ExtractionFailure::CandidateWithheld(reason.clone()));
        }
        Ok(first.parts.concat())
    }
}
