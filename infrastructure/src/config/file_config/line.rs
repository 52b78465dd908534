//! Chat-platform credentials from TOML (`[line]` section)
//!
//! Both values are secrets; in deployment they normally arrive through the
//! environment (`GAMEDAY_LINE__CHANNEL_ACCESS_TOKEN`,
//! `GAMEDAY_LINE__CHANNEL_SECRET`) rather than a file on disk.

use serde::{Deserialize, Serialize};

/// Messaging-platform channel credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLineConfig {
    /// Bearer token for the messaging API.
    pub channel_access_token: String,
    /// Shared secret used to verify webhook signatures.
    pub channel_secret: String,
}
