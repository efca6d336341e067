pub mod paths;

use crate::error::config::ConfigError;
use crate::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

pub const BASE_URL_ENV: &str = "OSSTATUS_BASE_URL";
pub const USER_AGENT_ENV: &str = "OSSTATUS_USER_AGENT";
pub const TIMEOUT_SECS_ENV: &str = "OSSTATUS_TIMEOUT_SECS";

/// Settings for reaching the lookup service.
///
/// `base_url` is the full search endpoint; `search=` and `platform=` are
/// appended to it. Point it at a proxy when the service itself is not
/// reachable directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl LookupConfig {
    /// Load `{config_dir}/config.json`, then apply environment overrides.
    ///
    /// # Returns
    ///
    /// Defaults (plus overrides) when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed, or if the merged result fails [`validate`](Self::validate).
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_file(config_dir)?;
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file only, without environment overrides.
    pub fn load_file(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            debug!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: LookupConfig = serde_json::from_str(&contents).map_err(|e| {
            debug!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Overwrite fields from `lookup(name)` for each override variable that is set.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = value_of(BASE_URL_ENV) {
            debug!("{BASE_URL_ENV} overrides base_url");
            self.base_url = base_url.trim().to_string();
        }

        if let Some(user_agent) = value_of(USER_AGENT_ENV) {
            debug!("{USER_AGENT_ENV} overrides user_agent");
            self.user_agent = user_agent;
        }

        if let Some(timeout) = value_of(TIMEOUT_SECS_ENV) {
            self.timeout_secs =
                timeout
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::ValidationError {
                        location: ErrorLocation::from(Location::caller()),
                        reason: format!(
                            "{TIMEOUT_SECS_ENV} must be a whole number of seconds, got '{timeout}': {e}"
                        ),
                    })?;
            debug!("{TIMEOUT_SECS_ENV} overrides timeout_secs");
        }

        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "base_url cannot be empty string".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", self.base_url),
            });
        }

        if let Err(e) = Url::parse(&self.base_url) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL {}: {e}", self.base_url),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "user_agent cannot be empty".to_string(),
            });
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be 1-{MAX_TIMEOUT_SECS})",
                    self.timeout_secs
                ),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
