//! Workspace client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Server the `refine` command talks to.
    pub base_url: String,
    /// Print results at once instead of typing them out.
    pub instant: bool,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            instant: false,
        }
    }
}
