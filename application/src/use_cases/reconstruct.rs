//! Reconstruct use case
//!
//! Orchestrates one refinement:
//!
//! ```text
//! Validation ─▶ Invocation ─▶ BaselineCleanup ─▶ [ModeCleanup] ─▶ CorruptionCheck
//!                                                                   │
//!                                      Success ◀────────────────────┴──▶ Corrupted
//! ```
//!
//! No step is retried. The only suspension point is the model call, which is
//! bounded by [`BehaviorConfig::timeout`].

use crate::config::BehaviorConfig;
use crate::ports::history_store::{HistoryStore, NoHistoryStore};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::stats::WordsRefinedCounter;
use reconstruct_domain::core::string::{char_len, truncate};
use reconstruct_domain::{
    AuthenticatedUser, CorruptedOutput, DomainError, ExtractionFailure, GenerationResponse,
    HistoryRecord, ModeRegistry, PromptTemplate, RefinementRequest, RefinementResult, sanitize,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};

/// Errors that can occur during a reconstruct call
#[derive(Error, Debug)]
pub enum ReconstructError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("Generation model API key not configured")]
    Configuration,

    #[error(transparent)]
    Upstream(#[from] GatewayError),

    #[error("Failed to extract text from response")]
    Extraction(#[source] ExtractionFailure),

    #[error("Empty response from generation model")]
    EmptyResponse,

    #[error(transparent)]
    Corrupted(#[from] CorruptedOutput),
}

/// Input for the [`ReconstructUseCase`].
#[derive(Debug, Clone)]
pub struct ReconstructInput {
    /// Text exactly as the client sent it.
    pub text: String,
    /// Mode key as the client sent it.
    pub mode: Option<String>,
    /// Present when the request carried a valid session.
    pub user: Option<AuthenticatedUser>,
}

impl ReconstructInput {
    pub fn new(text: impl Into<String>, mode: Option<String>) -> Self {
        Self {
            text: text.into(),
            mode,
            user: None,
        }
    }

    pub fn with_user(mut self, user: Option<AuthenticatedUser>) -> Self {
        self.user = user;
        self
    }
}

/// Use case for refining a piece of text.
///
/// `gateway` is `None` when no model credential was configured at startup;
/// every call then fails with [`ReconstructError::Configuration`] while the
/// rest of the process keeps serving.
#[derive(Clone)]
pub struct ReconstructUseCase {
    gateway: Option<Arc<dyn LlmGateway>>,
    history: Arc<dyn HistoryStore>,
    words: Arc<WordsRefinedCounter>,
    behavior: BehaviorConfig,
    side_effects: TaskTracker,
}

impl ReconstructUseCase {
    pub fn new(gateway: Option<Arc<dyn LlmGateway>>) -> Self {
        Self {
            gateway,
            history: Arc::new(NoHistoryStore),
            words: Arc::new(WordsRefinedCounter::default()),
            behavior: BehaviorConfig::default(),
            side_effects: TaskTracker::new(),
        }
    }

    pub fn with_history_store(mut self, history: Arc<dyn HistoryStore>) -> Self {
        self.history = history;
        self
    }

    pub fn with_words_counter(mut self, words: Arc<WordsRefinedCounter>) -> Self {
        self.words = words;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Whether a model credential was configured.
    pub fn is_configured(&self) -> bool {
        self.gateway.is_some()
    }

    pub fn words_counter(&self) -> &Arc<WordsRefinedCounter> {
        &self.words
    }

    /// Wait for in-flight history writes (used on shutdown and in tests).
    pub async fn drain_side_effects(&self) {
        self.side_effects.close();
        self.side_effects.wait().await;
        self.side_effects.reopen();
    }

    /// Execute one reconstruct request.
    pub async fn execute(
        &self,
        input: ReconstructInput,
    ) -> Result<RefinementResult, ReconstructError> {
        let request = RefinementRequest::try_new(input.text, input.mode)?;

        let Some(gateway) = self.gateway.as_ref() else {
            error!("Reconstruct requested but no generation model credential is configured");
            return Err(ReconstructError::Configuration);
        };

        info!(
            mode = %request.mode(),
            model = %self.behavior.model,
            input_chars = char_len(request.text()),
            "Starting reconstruct"
        );

        let prompt =
            PromptTemplate::reconstruct(ModeRegistry::resolve(request.mode_key()), request.text());
        let response = self.call_model(gateway.as_ref(), &prompt).await?;

        let raw = response.text().map_err(|e| {
            warn!("Could not extract text from model response: {}", e);
            ReconstructError::Extraction(e)
        })?;
        if raw.is_empty() {
            return Err(ReconstructError::EmptyResponse);
        }
        debug!(raw_chars = char_len(&raw), "Model output: {}", truncate(&raw, 120));

        let sanitized = sanitize(&raw, request.mode(), request.text()).inspect_err(|e| {
            warn!(reason = ?e.reason, report = ?e.report, "Refined output rejected");
        })?;
        if sanitized.report.casing_anomaly {
            warn!("Casing anomaly in refined output; returning it unchanged");
        }

        let result = RefinementResult::new(sanitized.text);
        let total = self.words.add(result.word_count as u64);
        debug!(
            words = result.word_count,
            total_words = total,
            "Reconstruct succeeded"
        );

        if let Some(user) = input.user {
            self.record_history(user, &request, &result);
        }

        Ok(result)
    }

    async fn call_model(
        &self,
        gateway: &dyn LlmGateway,
        prompt: &str,
    ) -> Result<GenerationResponse, GatewayError> {
        let call = gateway.generate(&self.behavior.model, prompt);
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => call.await,
        }
    }

    /// Dispatch the history write without waiting for it.
    fn record_history(
        &self,
        user: AuthenticatedUser,
        request: &RefinementRequest,
        result: &RefinementResult,
    ) {
        let record = HistoryRecord::from_refinement(&user, request, result);
        let store = Arc::clone(&self.history);
        self.side_effects.spawn(async move {
            match store.insert(&user, &record).await {
                Ok(()) => debug!(user_id = %user.id, "Refinement history recorded"),
                Err(e) => warn!(user_id = %user.id, "Failed to record refinement history: {}", e),
            }
        });
    }
}
