//! Auth provider / database configuration from TOML (`[store]` section)

use super::resolve_value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Project URL, e.g. `https://<ref>.supabase.co`
    pub url: Option<String>,
    /// Environment variable name for the project URL (default: "SUPABASE_URL").
    pub url_env: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: Option<String>,
    /// Environment variable name for the anon key (default: "SUPABASE_ANON_KEY").
    pub anon_key_env: String,
    /// Table refinement history is written to.
    pub history_table: String,
    /// Per-user running totals read by the dashboard.
    pub stats_table: String,
    /// Per-user, per-day activity rows.
    pub activity_table: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            url_env: "SUPABASE_URL".to_string(),
            anon_key: None,
            anon_key_env: "SUPABASE_ANON_KEY".to_string(),
            history_table: "refinement_history".to_string(),
            stats_table: "user_stats".to_string(),
            activity_table: "user_activity".to_string(),
        }
    }
}

impl FileStoreConfig {
    pub fn resolve_url_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        resolve_value(self.url.as_deref(), &self.url_env, env)
            .map(|url| url.trim_end_matches('/').to_string())
    }

    pub fn resolve_anon_key_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        resolve_value(self.anon_key.as_deref(), &self.anon_key_env, env)
    }

    /// URL and anon key together, or `None` if either is missing.
    pub fn resolve(&self) -> Option<(String, String)> {
        let env = |name: &str| std::env::var(name).ok();
        Some((self.resolve_url_with(env)?, self.resolve_anon_key_with(env)?))
    }
}
