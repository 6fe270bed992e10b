//! History store port
//!
//! The refinement history table lives in the external database. Writes run
//! on behalf of the user (their token), so row-level policies apply.
//! [`StoreError`] is shared with the stats store.

use async_trait::async_trait;
use reconstruct_domain::{AuthenticatedUser, HistoryId, HistoryRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected store response: {0}")]
    InvalidResponse(String),
}

/// Read/write access to a user's refinement history.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one row.
    async fn insert(&self, user: &AuthenticatedUser, record: &HistoryRecord)
    -> Result<(), StoreError>;

    /// Output text of the row `id` owned by `user`, if it exists.
    async fn find_output(
        &self,
        user: &AuthenticatedUser,
        id: &HistoryId,
    ) -> Result<Option<String>, StoreError>;
}

/// No-op store for tests and for deployments without a database.
pub struct NoHistoryStore;

#[async_trait]
impl HistoryStore for NoHistoryStore {
    async fn insert(
        &self,
        _user: &AuthenticatedUser,
        _record: &HistoryRecord,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_output(
        &self,
        _user: &AuthenticatedUser,
        _id: &HistoryId,
    ) -> Result<Option<String>, StoreError> {
        Ok(None)
    }
}
