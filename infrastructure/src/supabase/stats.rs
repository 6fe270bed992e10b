//! Usage totals and daily activity through PostgREST.

use super::{SupabaseClient, failure};
use async_trait::async_trait;
use chrono::NaiveDate;
use reconstruct_application::ports::history_store::StoreError;
use reconstruct_application::ports::stats_store::StatsStore;
use reconstruct_domain::{ActivityDay, AuthenticatedUser, UsageTotals};
use serde::de::DeserializeOwned;

pub struct SupabaseStatsStore {
    client: SupabaseClient,
    stats_table: String,
    activity_table: String,
}

impl SupabaseStatsStore {
    pub fn new(
        client: SupabaseClient,
        stats_table: impl Into<String>,
        activity_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            stats_table: stats_table.into(),
            activity_table: activity_table.into(),
        }
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        user: &AuthenticatedUser,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .client
            .get(&format!("/rest/v1/{}", table), &user.access_token)
            .query(&[("user_id", format!("eq.{}", user.id))])
            .query(query)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl StatsStore for SupabaseStatsStore {
    async fn totals(&self, user: &AuthenticatedUser) -> Result<Option<UsageTotals>, StoreError> {
        let rows: Vec<UsageTotals> = self
            .select(
                &self.stats_table,
                user,
                &[("select", "*".to_string()), ("limit", "1".to_string())],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn activity_since(
        &self,
        user: &AuthenticatedUser,
        since: NaiveDate,
    ) -> Result<Vec<ActivityDay>, StoreError> {
        self.select(
            &self.activity_table,
            user,
            &[
                (
                    "select",
                    "activity_date,word_count,refinement_count".to_string(),
                ),
                ("activity_date", format!("gte.{}", since.format("%Y-%m-%d"))),
                ("order", "activity_date.asc".to_string()),
            ],
        )
        .await
    }
}
