//! Submit refinement use case (client side)
//!
//! What the workspace does when the user presses "refine": a local blank
//! check, one call to the reconstruct endpoint, and a defensive sentinel
//! strip of whatever comes back. Rendering is left to presentation.

use crate::ports::refinement_api::{ClientError, ReconstructOutcome, RefinementApi};
use reconstruct_domain::sanitize::strip_sentinel;
use reconstruct_domain::{DomainError, Mode};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// The server answered with an error message meant for the user.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub struct SubmitRefinementUseCase {
    api: Arc<dyn RefinementApi>,
}

impl SubmitRefinementUseCase {
    pub fn new(api: Arc<dyn RefinementApi>) -> Self {
        Self { api }
    }

    /// Send `text` for refinement in `mode` (Standard when omitted).
    pub async fn execute(&self, text: &str, mode: Option<&str>) -> Result<String, SubmitError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText.into());
        }
        let mode = mode.unwrap_or(Mode::Standard.label());
        debug!(mode, "Submitting text for refinement");

        match self.api.reconstruct(text, mode).await? {
            ReconstructOutcome::Success { text } => {
                let text = strip_sentinel(&text);
                if text.is_empty() {
                    return Err(SubmitError::Rejected(
                        "No text returned from API".to_string(),
                    ));
                }
                Ok(text)
            }
            ReconstructOutcome::Failure { error } => {
                warn!("Refinement failed: {}", error);
                Err(SubmitError::Rejected(error))
            }
        }
    }
}
