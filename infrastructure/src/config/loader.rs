//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment variable prefix; `__` separates nested keys, so
/// `GAMEDAY_LINE__CHANNEL_SECRET` sets `line.channel_secret`.
const ENV_PREFIX: &str = "GAMEDAY_";

const PROJECT_FILES: [&str; 2] = ["gameday.toml", ".gameday.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GAMEDAY_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./gameday.toml` or `./.gameday.toml`
    /// 4. Global: `<config_dir>/gameday/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path (`<config_dir>/gameday/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gameday").join("config.toml"))
    }

    /// Get the project-level config file path (if one exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {ENV_PREFIX}* variables");

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./gameday.toml or ./.gameday.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            println!("  [{marker}] Global:  {}", path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
