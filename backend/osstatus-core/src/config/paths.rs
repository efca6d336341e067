//! Where the config file lives.
//!
//! Lookup order:
//! 1. `OSSTATUS_CONFIG_DIR` environment variable (explicit override)
//! 2. Platform config directory via `dirs` (`~/.config/osstatus`,
//!    `~/Library/Application Support/osstatus`, `%APPDATA%\osstatus`)

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::PathBuf;

use log::debug;

pub const CONFIG_DIR_ENV: &str = "OSSTATUS_CONFIG_DIR";
const APP_DIR_NAME: &str = "osstatus";

/// How the config directory was determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    EnvVar,
    PlatformDefault,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "{CONFIG_DIR_ENV}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
        }
    }
}

/// Detect the osstatus config directory.
///
/// # Errors
/// Returns [`ConfigError::DirectoryNotFound`] when neither the override nor
/// a platform config directory is available (e.g. no `HOME`).
#[track_caller]
pub fn detect_config_dir() -> Result<(PathBuf, PathSource), ConfigError> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV) {
        if !custom_dir.trim().is_empty() {
            debug!("Using {CONFIG_DIR_ENV} override: {custom_dir}");
            return Ok((PathBuf::from(custom_dir), PathSource::EnvVar));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join(APP_DIR_NAME);
        debug!("Platform config dir: {}", dir.display());
        return Ok((dir, PathSource::PlatformDefault));
    }

    Err(ConfigError::DirectoryNotFound {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("Cannot determine config directory. Set {CONFIG_DIR_ENV}."),
    })
}
