//! Restore history use case
//!
//! Fetches the output text of one of the caller's past refinements.

use crate::ports::history_store::HistoryStore;
use reconstruct_domain::{AuthenticatedUser, DomainError, HistoryId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RestoreError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("History item not found")]
    NotFound,
}

pub struct RestoreHistoryUseCase {
    store: Arc<dyn HistoryStore>,
}

impl RestoreHistoryUseCase {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// Look up `history_id` for `user`.
    ///
    /// The id is checked before the session so a malformed request is
    /// reported as such even when unauthenticated. Store failures are
    /// indistinguishable from a missing row to the caller.
    pub async fn execute(
        &self,
        history_id: Option<&str>,
        user: Option<&AuthenticatedUser>,
    ) -> Result<String, RestoreError> {
        let id = HistoryId::try_new(history_id.unwrap_or_default())?;
        let user = user.ok_or(RestoreError::Unauthorized)?;

        match self.store.find_output(user, &id).await {
            Ok(Some(text)) => {
                debug!(history_id = %id, user_id = %user.id, "History item restored");
                Ok(text)
            }
            Ok(None) => Err(RestoreError::NotFound),
            Err(e) => {
                warn!(history_id = %id, "History lookup failed: {}", e);
                Err(RestoreError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::history_store::StoreError;
    use async_trait::async_trait;
    use reconstruct_domain::HistoryRecord;

    struct MockStore {
        rows: Vec<(String, String, String)>,
        fail: bool,
    }

    #[async_trait]
    impl HistoryStore for MockStore {
        async fn insert(
            &self,
            _user: &AuthenticatedUser,
            _record: &HistoryRecord,
        ) -> Result<(), StoreError> {
            Ok(())
        }

        async fn find_output(
            &self,
            user: &AuthenticatedUser,
            id: &HistoryId,
        ) -> Result<Option<String>, StoreError> {
            if self.fail {
                return Err(StoreError::RequestFailed("down".to_string()));
            }
            Ok(self
                .rows
                .iter()
                .find(|(row_id, owner, _)| row_id == id.as_str() && *owner == user.id)
                .map(|(_, _, text)| text.clone()))
        }
    }

    fn use_case(fail: bool) -> RestoreHistoryUseCase {
        RestoreHistoryUseCase::new(Arc::new(MockStore {
            rows: vec![("42".to_string(), "alice".to_string(), "restored".to_string())],
            fail,
        }))
    }

    fn user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: id.to_string(),
            email: None,
            access_token: "t".to_string(),
        }
    }

    #[tokio::test]
    async fn test_restore_own_item() {
        let text = use_case(false)
            .execute(Some("42"), Some(&user("alice")))
            .await
            .unwrap();
        assert_eq!(text, "restored");
    }

    #[tokio::test]
    async fn test_missing_id_checked_first() {
        let err = use_case(false).execute(None, None).await.unwrap_err();
        assert_eq!(err, RestoreError::Validation(DomainError::EmptyHistoryId));
        assert_eq!(err.to_string(), "History ID is required");
    }

    #[tokio::test]
    async fn test_whitespace_id_goes_to_lookup() {
        let err = use_case(false).execute(Some("  "), None).await.unwrap_err();
        assert_eq!(err, RestoreError::Unauthorized);

        let err = use_case(false)
            .execute(Some("  "), Some(&user("alice")))
            .await
            .unwrap_err();
        assert_eq!(err, RestoreError::NotFound);
    }

    #[tokio::test]
    async fn test_anonymous_is_unauthorized() {
        let err = use_case(false).execute(Some("42"), None).await.unwrap_err();
        assert_eq!(err, RestoreError::Unauthorized);
    }

    #[tokio::test]
    async fn test_other_users_item_not_found() {
        let err = use_case(false)
            .execute(Some("42"), Some(&user("bob")))
            .await
            .unwrap_err();
        assert_eq!(err, RestoreError::NotFound);
    }

    #[tokio::test]
    async fn test_store_failure_reads_as_not_found() {
        let err = use_case(true)
            .execute(Some("42"), Some(&user("alice")))
            .await
            .unwrap_err();
        assert_eq!(err, RestoreError::NotFound);
    }
}
