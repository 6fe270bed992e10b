//! Supabase adapters
//!
//! Sessions are resolved through the GoTrue endpoint (`/auth/v1/user`);
//! history and stats rows go through PostgREST (`/rest/v1/{table}`). Every request
//! carries the project's anon key as `apikey` and the user's access token as
//! the bearer, so row-level security applies as it would in the browser.

mod auth;
mod history;
mod stats;

pub use auth::SupabaseSessionResolver;
pub use history::SupabaseHistoryStore;
pub use stats::SupabaseStatsStore;

use reconstruct_application::StoreError;
use reqwest::RequestBuilder;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection details shared by the auth and history adapters.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    fn get(&self, path: &str, access_token: &str) -> RequestBuilder {
        self.authorize(self.http.get(format!("{}{}", self.url, path)), access_token)
    }

    fn post(&self, path: &str, access_token: &str) -> RequestBuilder {
        self.authorize(self.http.post(format!("{}{}", self.url, path)), access_token)
    }

    fn authorize(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
    }
}

async fn failure(response: reqwest::Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    StoreError::RequestFailed(format!("HTTP {}: {}", status, body.trim()))
}
