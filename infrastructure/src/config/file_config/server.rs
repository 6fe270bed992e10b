//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind (default: "127.0.0.1")
    pub host: String,
    /// Port to bind (default: 3000)
    pub port: u16,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
        }
    }
}

impl FileServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
