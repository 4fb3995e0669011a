use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::remote::DEFAULT_BOOTSTRAP_URL;

/// Configuration for kinescope.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (KINE_* prefix)
/// 3. Config file (~/.config/kinescope/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the bootstrap catalog document.
    ///
    /// Can be set via:
    /// - ENV: KINE_BOOTSTRAP_URL
    /// - Config: bootstrap_url = "..."
    #[serde(default = "default_bootstrap_url")]
    pub bootstrap_url: String,

    /// Path to the SQLite catalog database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: KINE_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/kinescope/kinescope.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,

    /// Lower bound of the resync jitter range, in seconds.
    #[serde(default = "default_jitter_min_secs")]
    pub jitter_min_secs: u64,

    /// Upper bound of the resync jitter range, in seconds.
    #[serde(default = "default_jitter_max_secs")]
    pub jitter_max_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bootstrap_url: default_bootstrap_url(),
            database_path: default_db_path(),
            jitter_min_secs: default_jitter_min_secs(),
            jitter_max_secs: default_jitter_max_secs(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/kinescope/config.toml
    /// Reads environment variables with KINE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("kine");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with custom database path.
    ///
    /// This is used when the --db CLI flag is provided.
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = db_path;
        Ok(config)
    }

    /// The resync jitter range as durations.
    #[must_use]
    pub fn jitter_range(&self) -> (Duration, Duration) {
        (
            Duration::from_secs(self.jitter_min_secs),
            Duration::from_secs(self.jitter_max_secs),
        )
    }
}

fn default_bootstrap_url() -> String {
    DEFAULT_BOOTSTRAP_URL.to_string()
}

/// Get the default database path.
///
/// Returns: ~/.local/share/kinescope/kinescope.db (or platform equivalent)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinescope")
        .join("kinescope.db")
}

const fn default_jitter_min_secs() -> u64 {
    3600 // 1 hour
}

const fn default_jitter_max_secs() -> u64 {
    24 * 3600 // 24 hours
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/kinescope/config.toml
/// - macOS: ~/Library/Application Support/kinescope/config.toml
/// - Windows: %APPDATA%\kinescope\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinescope")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Kinescope Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (KINE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Location of the bootstrap catalog document
#
# Can also be set via:
# - Environment: KINE_BOOTSTRAP_URL=https://...
#bootstrap_url = "https://github.com/JarbasSkills/skill-retrotv/raw/dev/bootstrap.json"

# Path to the SQLite catalog database
#
# Can also be set via:
# - CLI: kinescope --db /custom/path.db sync
# - Environment: KINE_DATABASE_PATH=/custom/path.db
#
# Default: Platform-specific data directory
#database_path = "/path/to/custom/kinescope.db"

# Resync jitter range in seconds. After every sync run the next run is
# scheduled a uniformly random delay inside this range later.
#jitter_min_secs = 3600
#jitter_max_secs = 86400
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
