//! Wiring for the standalone binary: directories, `.env`, config, command.

use crate::error::OsStatusError;

use common::ErrorLocation;

use osstatus_core::config::paths::detect_config_dir;
use osstatus_core::error::CoreError;
use osstatus_core::{LookupConfig, OsStatusClient, OsStatusCommand, Styling};

use std::env;
use std::fs::create_dir_all;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info};

pub const LOG_DIR_ENV: &str = "OSSTATUS_LOG_DIR";
const APP_DIR_NAME: &str = "osstatus";

/// Directory for `osstatus.log`, created if missing.
///
/// `OSSTATUS_LOG_DIR` wins over the platform cache directory.
#[track_caller]
pub fn log_dir() -> Result<PathBuf, OsStatusError> {
    let dir = match env::var(LOG_DIR_ENV) {
        Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
        _ => dirs::cache_dir()
            .map(|cache| cache.join(APP_DIR_NAME))
            .ok_or_else(|| OsStatusError::OsStatus {
                message: format!("Cannot determine log directory. Set {LOG_DIR_ENV}."),
                location: ErrorLocation::from(Location::caller()),
            })?,
    };

    create_dir_all(&dir).map_err(|e| OsStatusError::OsStatus {
        message: format!("Failed to create log directory {}: {e}", dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(dir)
}

/// Load `.env` from the working directory or its parents. Missing is fine.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("No .env loaded: {e}");
            None
        }
    }
}

/// Config from the detected config directory plus environment overrides.
pub fn load_config() -> Result<LookupConfig, CoreError> {
    let (config_dir, source) = detect_config_dir()?;
    info!("Config directory {} ({source})", config_dir.display());
    Ok(LookupConfig::load(&config_dir)?)
}

pub fn build_command(config: &LookupConfig, styling: Styling) -> Result<OsStatusCommand, CoreError> {
    let client = OsStatusClient::from_config(config)?;
    info!(
        "Using lookup endpoint {} (timeout {}s)",
        client.base_url(),
        config.timeout_secs
    );
    Ok(OsStatusCommand::new(client, styling))
}
