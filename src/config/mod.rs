//! Configuration management for the analyzer
//!
//! Settings come from, in increasing precedence: built-in defaults, a YAML
//! config file, environment variables, and command-line flags. This module
//! handles the first three; flags are applied by the command context.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::API_BASE_URL;
use crate::error::{Error, Result};

/// Directory name used under the platform config and cache directories
pub const APP_DIR: &str = "github-repo-analyzer";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GHRA_API_URL";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cache: CacheConfig,
    pub api: ApiConfig,
    pub limits: LimitsConfig,
    pub output: OutputConfig,
}

/// Response cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory (defaults to the platform cache directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    pub ttl_seconds: u64,
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            directory: None,
            ttl_seconds: 3600,
            enabled: true,
        }
    }
}

/// GitHub API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Total attempts for a rate-limited request
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
    /// Records per page (the API caps this at 100)
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            retry_base_delay_ms: 1000,
            page_size: 100,
        }
    }
}

/// Bounds for `--limit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            default_limit: 100,
            max_limit: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Number of languages listed by the summary output
    pub summary_languages: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_languages: 5,
        }
    }
}

/// Platform cache directory for the analyzer, or `.cache` when there is none.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".cache"))
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
    }

    /// Load configuration with environment overrides applied and validated.
    ///
    /// An explicit `path` must exist. Without one, the default file is read
    /// when present and the built-in defaults are used otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = Self::load_at(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load the file layer only.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::configuration(format!("Config file not found: {}", path.display())));
        }

        log::debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("Failed to read {}: {}", path.display(), e)).with_cause(e)
        })?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("API base URL overridden by {}", API_URL_ENV);
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Check that settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_seconds == 0 {
            return Err(Error::configuration("api.timeout_seconds must be positive"));
        }
        if self.api.max_retries == 0 {
            return Err(Error::configuration("api.max_retries must be at least 1"));
        }
        if self.api.page_size == 0 {
            return Err(Error::configuration("api.page_size must be positive"));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::configuration("api.base_url must not be empty"));
        }
        if self.limits.default_limit == 0 {
            return Err(Error::configuration("limits.default_limit must be positive"));
        }
        if self.limits.max_limit <= self.limits.default_limit {
            return Err(Error::configuration(
                "limits.max_limit must be greater than limits.default_limit",
            ));
        }
        Ok(())
    }

    /// Cache directory from the config file, or the platform default.
    pub fn cache_dir(&self) -> PathBuf {
        self.cache
            .directory
            .clone()
            .unwrap_or_else(default_cache_dir)
    }
}
