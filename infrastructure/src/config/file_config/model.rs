//! Generation model configuration from TOML (`[model]` section)

use super::resolve_value;
use crate::providers::gemini::DEFAULT_BASE_URL;
use reconstruct_domain::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Environment variable name for the model identifier (default: "GEMINI_MODEL").
    pub name_env: String,
    /// Model identifier; the env var is consulted when unset.
    pub name: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Bound on one model call in seconds; 0 disables it (default: 30).
    pub timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            name_env: "GEMINI_MODEL".to_string(),
            name: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileModelConfig {
    pub fn resolve_api_key_with(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        resolve_value(self.api_key.as_deref(), &self.api_key_env, env)
    }

    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_model_with(&self, env: impl Fn(&str) -> Option<String>) -> Model {
        Model::from_config(resolve_value(self.name.as_deref(), &self.name_env, env).as_deref())
    }

    pub fn resolve_model(&self) -> Model {
        self.resolve_model_with(|name| std::env::var(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_matches_gateway() {
        assert_eq!(FileModelConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = FileModelConfig {
            api_key: Some("explicit".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_key_from_named_env_var() {
        let config = FileModelConfig {
            api_key_env: "MY_KEY".to_string(),
            ..Default::default()
        };
        let env = |name: &str| (name == "MY_KEY").then(|| "secret".to_string());
        assert_eq!(config.resolve_api_key_with(env).as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = FileModelConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key_with(|_| Some(String::new())).is_none());
    }

    #[test]
    fn test_model_defaults_to_flash() {
        let config = FileModelConfig::default();
        assert_eq!(config.resolve_model_with(|_| None), Model::Gemini25Flash);
    }

    #[test]
    fn test_model_from_env() {
        let config = FileModelConfig::default();
        let model = config.resolve_model_with(|_| Some("gemini-2.5-pro".to_string()));
        assert_eq!(model, Model::Gemini25Pro);
    }
}
