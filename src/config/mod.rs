//! Configuration management for the sweeper
//!
//! Settings come from an optional YAML file. Command-line flags and their
//! environment variables are layered on top in [`Settings::resolve`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default GitHub REST API host
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "sweeper.log";

/// GitHub caps `per_page` at 100
pub const MAX_PAGE_SIZE: usize = 100;

/// Contents of the optional config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Custom API host (GitHub Enterprise or a local test server)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Log file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Repositories requested per page while listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: None,
            log_file: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".gh-repo-sweeper").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file yields the defaults; the tool runs fine without one.
    pub fn load_at(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the GitHub API would refuse
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            ))
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()).into());
        }
        Ok(())
    }
}

/// Effective settings after layering flags/env over the config file
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_host: String,
    pub log_file: PathBuf,
    pub page_size: usize,
    pub timeout_secs: u64,
    pub debug: bool,
}

impl Settings {
    /// Combine CLI overrides with the file config. Overrides win.
    pub fn resolve(
        config: Config,
        api_host: Option<&str>,
        log_file: Option<&Path>,
        debug: bool,
    ) -> Self {
        let api_host = api_host
            .map(str::to_string)
            .or(config.api_host)
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        let log_file = log_file
            .map(Path::to_path_buf)
            .or(config.log_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self {
            api_host: api_host.trim_end_matches('/').to_string(),
            log_file,
            page_size: config.page_size,
            timeout_secs: config.timeout_secs,
            debug,
        }
    }
}
