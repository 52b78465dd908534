//! Session configuration from TOML (`[session]` section)
//!
//! Controls the option catalog, the quorum threshold and the command prefix
//! that opens a session. All of it is fixed for the process lifetime.
//!
//! Example configuration:
//!
//! ```toml
//! [session]
//! quorum = 4
//! command_prefix = "/open"
//!
//! [[session.options]]
//! id = "1"
//! label = "1000/100"
//!
//! [[session.options]]
//! id = "2"
//! label = "500/100"
//! ```

use gameday_domain::{DomainError, GameOption, OptionCatalog, QuorumPolicy};
use serde::{Deserialize, Serialize};

/// One catalog entry as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOptionConfig {
    /// Stable id referenced by sessions and button actions.
    pub id: String,
    /// Label shown on the option picker.
    pub label: String,
}

/// Session catalog and quorum configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Distinct signups one option needs to finalize the session.
    pub quorum: usize,
    /// Message prefix that opens a new session; the rest of the message is
    /// the free-text scheduled time.
    pub command_prefix: String,
    /// Ordered option catalog.
    pub options: Vec<FileOptionConfig>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            quorum: QuorumPolicy::DEFAULT_THRESHOLD,
            command_prefix: "/open".to_string(),
            options: vec![
                FileOptionConfig {
                    id: "1".to_string(),
                    label: "1000/100".to_string(),
                },
                FileOptionConfig {
                    id: "2".to_string(),
                    label: "500/100".to_string(),
                },
                FileOptionConfig {
                    id: "3".to_string(),
                    label: "300/50".to_string(),
                },
                FileOptionConfig {
                    id: "4".to_string(),
                    label: "大老二".to_string(),
                },
                FileOptionConfig {
                    id: "5".to_string(),
                    label: "十三支".to_string(),
                },
            ],
        }
    }
}

impl FileSessionConfig {
    /// Builds the validated option catalog.
    pub fn catalog(&self) -> Result<OptionCatalog, DomainError> {
        OptionCatalog::new(
            self.options
                .iter()
                .map(|o| GameOption::new(o.id.as_str(), o.label.as_str()))
                .collect(),
        )
    }

    /// Builds the validated quorum policy.
    pub fn policy(&self) -> Result<QuorumPolicy, DomainError> {
        QuorumPolicy::new(self.quorum)
    }
}
