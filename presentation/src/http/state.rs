//! Shared state for the HTTP handlers.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use reconstruct_application::{
    AnonymousSessions, NoHistoryStore, NoStatsStore, ReconstructUseCase, RestoreHistoryUseCase,
    SessionResolver, UserStatsUseCase, WordsRefinedCounter,
};
use reconstruct_domain::AuthenticatedUser;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub reconstruct: Arc<ReconstructUseCase>,
    pub restore: Arc<RestoreHistoryUseCase>,
    pub stats: Arc<UserStatsUseCase>,
    pub sessions: Arc<dyn SessionResolver>,
}

impl AppState {
    pub fn new(
        reconstruct: Arc<ReconstructUseCase>,
        restore: Arc<RestoreHistoryUseCase>,
        sessions: Arc<dyn SessionResolver>,
    ) -> Self {
        Self {
            reconstruct,
            restore,
            stats: Arc::new(UserStatsUseCase::new(Arc::new(NoStatsStore))),
            sessions,
        }
    }

    pub fn with_stats(mut self, stats: Arc<UserStatsUseCase>) -> Self {
        self.stats = stats;
        self
    }

    /// State with no auth provider and no history table.
    pub fn anonymous(reconstruct: ReconstructUseCase) -> Self {
        Self::new(
            Arc::new(reconstruct),
            Arc::new(RestoreHistoryUseCase::new(Arc::new(NoHistoryStore))),
            Arc::new(AnonymousSessions),
        )
    }

    pub fn words(&self) -> &Arc<WordsRefinedCounter> {
        self.reconstruct.words_counter()
    }

    /// The user behind the request's bearer token, if any.
    ///
    /// An unreachable or failing auth provider is treated as anonymous.
    pub async fn current_user(&self, headers: &HeaderMap) -> Option<AuthenticatedUser> {
        let token = bearer_token(headers)?;
        match self.sessions.resolve(token).await {
            Ok(user) => user,
            Err(e) => {
                warn!("Session lookup failed, continuing anonymously: {}", e);
                None
            }
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();
    (!token.is_empty()).then_some(token)
}
