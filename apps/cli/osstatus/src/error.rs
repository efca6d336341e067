use common::ErrorLocation;

use osstatus_core::error::CoreError;

use std::panic::Location;

use thiserror::Error;

/// Errors raised while bringing the standalone command up.
///
/// Lookup failures never get here: the command reports those to its host.
#[derive(Debug, Error)]
pub enum OsStatusError {
    /// Error from this binary (log setup, directories)
    #[error("OsStatus Error: {message} {location}")]
    OsStatus {
        message: String,
        location: ErrorLocation,
    },

    /// Error from osstatus-core (config, client construction)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for OsStatusError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        OsStatusError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
