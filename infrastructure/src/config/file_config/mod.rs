//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file. They
//! are deserialized directly; conversions into validated domain types live on
//! the section structs.

mod line;
mod server;
mod session;

pub use line::FileLineConfig;
pub use server::FileServerConfig;
pub use session::{FileOptionConfig, FileSessionConfig};

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Session catalog and quorum settings
    pub session: FileSessionConfig,
    /// Chat-platform credentials
    pub line: FileLineConfig,
}

impl FileConfig {
    /// Validates the whole configuration for startup.
    ///
    /// Catalog and quorum values must convert into their domain types and
    /// platform credentials must be present; any failure aborts startup with
    /// a descriptive error rather than limping along misconfigured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.catalog()?;
        self.session.policy()?;
        if self.session.command_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyCommandPrefix);
        }
        if self.line.channel_access_token.is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        if self.line.channel_secret.is_empty() {
            return Err(ConfigError::MissingChannelSecret);
        }
        Ok(())
    }
}
