//! Logging for the standalone `osstatus` command.
//!
//! Warnings go to stderr with colored levels; everything at the build's log
//! level goes to a plain-text file. stdout is reserved for results.

use crate::error::OsStatusError;

use common::ErrorLocation;

use std::fmt::{Arguments, Display};
use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::{Dispatch, FormatCallback};
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339_seconds;
use log::{LevelFilter, Record, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

/// Set by the first call, successful or not.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "osstatus.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Console output only carries problems.
pub const CONSOLE_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Default log level for release builds.
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stderr + file).
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the global logger
/// cannot be installed.
pub fn initialize(log_dir: &Path) -> Result<(), OsStatusError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    result
}

#[track_caller]
pub(crate) fn initialize_internal(log_dir: &Path) -> Result<(), OsStatusError> {
    let log_file = fern::log_file(log_dir.join(LOG_FILE_NAME)).map_err(|e| {
        OsStatusError::OsStatus {
            message: format!("Failed to create log file in {}: {e}", log_dir.display()),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let console = Dispatch::new()
        .level(CONSOLE_LOG_LEVEL)
        .format(move |out, message, record| {
            write_line(out, message, record, colors.color(record.level()))
        })
        .chain(stderr());

    let file = Dispatch::new()
        .format(|out, message, record| write_line(out, message, record, record.level()))
        .chain(log_file);

    Dispatch::new()
        .level(LOG_LEVEL)
        .chain(console)
        .chain(file)
        .apply()
        .map_err(|e| OsStatusError::OsStatus {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// `[<time> - <LEVEL>] <message> [<file>:<line>]`
fn write_line(out: FormatCallback<'_>, message: &Arguments<'_>, record: &Record<'_>, level: impl Display) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        format_rfc3339_seconds(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
