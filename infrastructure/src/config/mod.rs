//! Configuration file loading for gameday
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `GAMEDAY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./gameday.toml` or `./.gameday.toml`
//! 4. Global: `<config_dir>/gameday/config.toml`
//! 5. Default values

mod file_config;
mod loader;

use gameday_domain::DomainError;
use thiserror::Error;

pub use file_config::{
    FileConfig, FileLineConfig, FileOptionConfig, FileServerConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;

/// Errors raised while validating configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid [session] configuration: {0}")]
    Session(#[from] DomainError),

    #[error("session.command_prefix must not be empty")]
    EmptyCommandPrefix,

    #[error("line.channel_access_token is not set (export GAMEDAY_LINE__CHANNEL_ACCESS_TOKEN)")]
    MissingAccessToken,

    #[error("line.channel_secret is not set (export GAMEDAY_LINE__CHANNEL_SECRET)")]
    MissingChannelSecret,
}
