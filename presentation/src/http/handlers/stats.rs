//! `GET /api/stats` and `GET /api/words-refined`

use crate::http::error::ApiError;
use crate::http::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use reconstruct_domain::{ActivityDay, UsageSummary};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub quota: u64,
    pub saved_time: String,
    pub avg_variance: f64,
    pub activity: Vec<ActivityDay>,
}

impl From<UsageSummary> for StatsResponse {
    fn from(summary: UsageSummary) -> Self {
        Self {
            quota: summary.quota,
            saved_time: summary.saved_time,
            avg_variance: summary.avg_variance,
            activity: summary.activity,
        }
    }
}

/// Dashboard numbers for the signed-in user.
pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, ApiError> {
    let user = state.current_user(&headers).await;
    let summary = state.stats.execute(user.as_ref()).await?;
    Ok(Json(summary.into()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsRefinedResponse {
    pub words_refined: u64,
}

/// Process-wide counter shown on the landing page.
pub async fn words_refined(State(state): State<AppState>) -> Json<WordsRefinedResponse> {
    Json(WordsRefinedResponse {
        words_refined: state.words().get(),
    })
}
