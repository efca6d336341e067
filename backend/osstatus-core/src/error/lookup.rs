use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::error::Error as StdError;
use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LookupError {
    /// No response at all: DNS, refused connection, TLS failure, timeout.
    #[error("Connection Error: {message} {location}")]
    Connection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Status Error: {message} {location}")]
    Status {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// The body was not a JSON array of records.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Query Error: {message} {location}")]
    Query {
        message: String,
        location: ErrorLocation,
    },
}

impl LookupError {
    #[track_caller]
    pub fn status(status: HttpStatusCode) -> Self {
        LookupError::Status {
            status,
            message: format!("Server returned HTTP status code: {status}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The human-readable part, e.g. `Server returned HTTP status code: 500`.
    pub fn message(&self) -> &str {
        match self {
            LookupError::Connection { message, .. }
            | LookupError::Status { message, .. }
            | LookupError::Decode { message, .. }
            | LookupError::Request { message, .. }
            | LookupError::UrlParse { message, .. }
            | LookupError::Query { message, .. } => message,
        }
    }

    /// Status code for [`LookupError::Status`], `None` for every other kind.
    pub fn http_status(&self) -> Option<HttpStatusCode> {
        match self {
            LookupError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Joins an error and its sources: `outer: inner: root`.
///
/// reqwest's own message is generic ("error sending request for url"); the
/// useful part (refused, dns, tls) sits further down the chain.
pub(crate) fn describe_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}

impl From<url::ParseError> for LookupError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LookupError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let reason = describe_chain(&error);

        if error.is_decode() {
            LookupError::Decode {
                message: format!("Invalid response body: {reason}"),
                location,
            }
        } else if error.is_connect() || error.is_timeout() {
            LookupError::Connection {
                message: format!("Unable to connect to server: {reason}"),
                location,
            }
        } else if let Some(status) = error.status() {
            LookupError::Status {
                status: HttpStatusCode(status.as_u16()),
                message: format!("Server returned HTTP status code: {}", status.as_u16()),
                location,
            }
        } else {
            LookupError::Request {
                message: reason,
                location,
            }
        }
    }
}

impl From<serde_json::Error> for LookupError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        LookupError::Decode {
            message: format!("Unexpected response shape: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for LookupError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { message, location } => {
                LookupError::Query { message, location }
            }
        }
    }
}
