//! Session resolution through `GET /auth/v1/user`.

use super::SupabaseClient;
use async_trait::async_trait;
use reconstruct_application::ports::session_resolver::{AuthError, SessionResolver};
use reconstruct_domain::AuthenticatedUser;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct UserBody {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

pub struct SupabaseSessionResolver {
    client: SupabaseClient,
}

impl SupabaseSessionResolver {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionResolver for SupabaseSessionResolver {
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthenticatedUser>, AuthError> {
        let response = self
            .client
            .get("/auth/v1/user", access_token)
            .send()
            .await
            .map_err(|e| AuthError::Unreachable(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Access token rejected by auth provider");
                Ok(None)
            }
            status if status.is_success() => {
                let user: UserBody = response
                    .json()
                    .await
                    .map_err(|e| AuthError::Rejected(format!("Malformed user body: {}", e)))?;
                Ok(Some(AuthenticatedUser {
                    id: user.id,
                    email: user.email,
                    access_token: access_token.to_string(),
                }))
            }
            status => Err(AuthError::Rejected(format!("HTTP {}", status.as_u16()))),
        }
    }
}
