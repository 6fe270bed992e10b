//! Refinement history through PostgREST.

use super::{SupabaseClient, failure};
use async_trait::async_trait;
use reconstruct_application::ports::history_store::{HistoryStore, StoreError};
use reconstruct_domain::{AuthenticatedUser, HistoryId, HistoryRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OutputRow {
    output_text: String,
}

pub struct SupabaseHistoryStore {
    client: SupabaseClient,
    table: String,
}

impl SupabaseHistoryStore {
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    fn path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }
}

#[async_trait]
impl HistoryStore for SupabaseHistoryStore {
    async fn insert(
        &self,
        user: &AuthenticatedUser,
        record: &HistoryRecord,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .post(&self.path(), &user.access_token)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }
        Ok(())
    }

    async fn find_output(
        &self,
        user: &AuthenticatedUser,
        id: &HistoryId,
    ) -> Result<Option<String>, StoreError> {
        let response = self
            .client
            .get(&self.path(), &user.access_token)
            .query(&[
                ("select", "output_text".to_string()),
                ("id", format!("eq.{}", id)),
                ("user_id", format!("eq.{}", user.id)),
                ("limit", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        let rows: Vec<OutputRow> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        Ok(rows.into_iter().next().map(|row| row.output_text))
    }
}
