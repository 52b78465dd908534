//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Webhook server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address the webhook server listens on.
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}
