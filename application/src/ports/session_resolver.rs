//! Session resolution port
//!
//! Maps a bearer token from the incoming request to the user it belongs to.
//! Identity management itself (sign-up, sign-in, recovery) is owned by the
//! external auth provider.

use async_trait::async_trait;
use reconstruct_domain::AuthenticatedUser;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Auth provider unreachable: {0}")]
    Unreachable(String),

    #[error("Auth provider rejected the request: {0}")]
    Rejected(String),
}

/// Resolves access tokens to users.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// `Ok(None)` means the token is not (or no longer) valid.
    async fn resolve(&self, access_token: &str) -> Result<Option<AuthenticatedUser>, AuthError>;
}

/// Resolver used when no auth provider is configured: every request is anonymous.
pub struct AnonymousSessions;

#[async_trait]
impl SessionResolver for AnonymousSessions {
    async fn resolve(&self, _access_token: &str) -> Result<Option<AuthenticatedUser>, AuthError> {
        Ok(None)
    }
}
