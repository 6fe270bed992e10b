//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Secrets are never read here directly; the `resolve_*` helpers consult the
//! environment variable each section names.

mod client;
mod logging;
mod model;
mod server;
mod stats;
mod store;

pub use client::FileClientConfig;
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use server::FileServerConfig;
pub use stats::FileStatsConfig;
pub use store::FileStoreConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The process cannot start with this configuration.
    Error,
    /// The process starts, but some feature is disabled or degraded.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Explicit non-blank value, else the non-blank value of the named variable.
fn resolve_value(
    explicit: Option<&str>,
    env_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| {
            env(env_name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Generation model settings
    pub model: FileModelConfig,
    /// Auth provider and history table
    pub store: FileStoreConfig,
    /// Words-refined counter
    pub stats: FileStatsConfig,
    /// Workspace client settings
    pub client: FileClientConfig,
    /// Log file output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Environment lookups go through `env` so the check can be exercised
    /// without touching the process environment.
    pub fn validate_with(&self, env: impl Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.resolve_api_key_with(&env).is_none() {
            issues.push(ConfigIssue::warning(format!(
                "model: no API key (set {} or model.api_key); reconstruct requests will fail",
                self.model.api_key_env
            )));
        }

        if self.model.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "model.timeout_secs is 0; model calls will not be bounded",
            ));
        }

        if self.store.resolve_url_with(&env).is_none() {
            issues.push(ConfigIssue::warning(format!(
                "store: no URL (set {} or store.url); sessions and history are disabled",
                self.store.url_env
            )));
        } else if self.store.resolve_anon_key_with(&env).is_none() {
            issues.push(ConfigIssue::warning(format!(
                "store: no anon key (set {} or store.anon_key); sessions and history are disabled",
                self.store.anon_key_env
            )));
        }

        for (key, table) in [
            ("store.history_table", &self.store.history_table),
            ("store.stats_table", &self.store.stats_table),
            ("store.activity_table", &self.store.activity_table),
        ] {
            if table.trim().is_empty() {
                issues.push(ConfigIssue::error(format!("{} must not be empty", key)));
            }
        }

        if self.server.port == 0 {
            issues.push(ConfigIssue::warning(
                "server.port is 0; an ephemeral port will be chosen",
            ));
        }

        issues
    }

    /// [`validate_with`](Self::validate_with) against the process environment.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.validate_with(|name| std::env::var(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 8080
cors_origins = ["https://ctrl.build"]

[model]
name = "gemini-2.5-pro"
timeout_secs = 45

[store]
url = "https://project.supabase.co"
history_table = "history"

[stats]
words_refined_seed = 99

[client]
base_url = "https://ctrl.build"
instant = true

[logging]
directory = "/var/log/ctrl-build"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.server.cors_origins, vec!["https://ctrl.build"]);
        assert_eq!(config.model.name.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.model.timeout_secs, 45);
        assert_eq!(config.store.history_table, "history");
        assert_eq!(config.stats.words_refined_seed, 99);
        assert_eq!(config.client.base_url, "https://ctrl.build");
        assert!(config.client.instant);
        assert!(config.logging.directory.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 4000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 4000);
        // Defaults should apply
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.model.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.store.history_table, "refinement_history");
        assert_eq!(config.store.stats_table, "user_stats");
        assert_eq!(config.store.activity_table, "user_activity");
        assert_eq!(config.stats.words_refined_seed, 14204);
    }

    #[test]
    fn test_validate_reports_missing_credentials() {
        let issues = FileConfig::default().validate_with(no_env);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues[0].message.contains("GEMINI_API_KEY"));
        assert!(issues[1].message.contains("SUPABASE_URL"));
    }

    #[test]
    fn test_validate_fully_configured() {
        let env = |name: &str| match name {
            "GEMINI_API_KEY" => Some("key".to_string()),
            "SUPABASE_URL" => Some("https://project.supabase.co".to_string()),
            "SUPABASE_ANON_KEY" => Some("anon".to_string()),
            _ => None,
        };
        assert!(FileConfig::default().validate_with(env).is_empty());
    }

    #[test]
    fn test_validate_missing_anon_key() {
        let mut config = FileConfig::default();
        config.store.url = Some("https://project.supabase.co".to_string());
        config.model.api_key = Some("key".to_string());
        let issues = config.validate_with(no_env);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn test_validate_empty_table_is_error() {
        let mut config = FileConfig::default();
        config.store.history_table = " ".to_string();
        let issues = config.validate_with(no_env);
        assert!(issues.iter().any(|i| i.severity == Severity::Error));

        let mut config = FileConfig::default();
        config.store.activity_table = String::new();
        let issues = config.validate_with(no_env);
        assert!(
            issues
                .iter()
                .any(|i| i.severity == Severity::Error && i.message.contains("activity_table"))
        );
    }
}
