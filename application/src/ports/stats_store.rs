//! Stats store port
//!
//! Totals and daily activity are maintained by the database; this side only
//! reads them, with the user's own token.

use super::history_store::StoreError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reconstruct_domain::{ActivityDay, AuthenticatedUser, UsageTotals};

#[async_trait]
pub trait StatsStore: Send + Sync {
    /// The user's totals row, or `None` if they have none yet.
    async fn totals(&self, user: &AuthenticatedUser) -> Result<Option<UsageTotals>, StoreError>;

    /// Activity rows dated on or after `since`, oldest first.
    async fn activity_since(
        &self,
        user: &AuthenticatedUser,
        since: NaiveDate,
    ) -> Result<Vec<ActivityDay>, StoreError>;
}

/// Store for deployments without a database: every user is new.
pub struct NoStatsStore;

#[async_trait]
impl StatsStore for NoStatsStore {
    async fn totals(&self, _user: &AuthenticatedUser) -> Result<Option<UsageTotals>, StoreError> {
        Ok(None)
    }

    async fn activity_since(
        &self,
        _user: &AuthenticatedUser,
        _since: NaiveDate,
    ) -> Result<Vec<ActivityDay>, StoreError> {
        Ok(Vec::new())
    }
}
