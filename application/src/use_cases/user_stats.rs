//! User stats use case
//!
//! Builds the dashboard summary for the signed-in user.

use crate::ports::history_store::StoreError;
use crate::ports::stats_store::StatsStore;
use chrono::{Days, NaiveDate, Utc};
use reconstruct_domain::usage::ACTIVITY_WINDOW_DAYS;
use reconstruct_domain::{AuthenticatedUser, UsageSummary};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct UserStatsUseCase {
    store: Arc<dyn StatsStore>,
}

impl UserStatsUseCase {
    pub fn new(store: Arc<dyn StatsStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<UsageSummary, StatsError> {
        self.execute_on(user, Utc::now().date_naive()).await
    }

    /// Summary as of `today` (UTC).
    pub async fn execute_on(
        &self,
        user: Option<&AuthenticatedUser>,
        today: NaiveDate,
    ) -> Result<UsageSummary, StatsError> {
        let user = user.ok_or(StatsError::Unauthorized)?;
        let since = today
            .checked_sub_days(Days::new(ACTIVITY_WINDOW_DAYS.into()))
            .unwrap_or(NaiveDate::MIN);

        let totals = self.store.totals(user).await?;
        let activity = self.store.activity_since(user, since).await?;
        debug!(user_id = %user.id, days = activity.len(), "Usage summary loaded");

        Ok(UsageSummary::new(totals, activity))
    }
}
