use crate::command::CommandOutcome;
use crate::command::host::{CommandHost, LOOKUP_FAILURE_LOG_LEVEL, report};
use crate::error::command::CommandError;
use crate::error::lookup::LookupError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

#[derive(Default)]
struct RecordingHost {
    messages: Vec<String>,
    error: Option<String>,
    usage: Vec<String>,
}

impl CommandHost for RecordingHost {
    fn append_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn print_usage(&mut self, usage: &str) {
        self.usage.push(usage.to_string());
    }
}

#[test]
fn given_lines_when_reported_then_each_becomes_a_message() {
    let mut host = RecordingHost::default();

    report(
        Ok(CommandOutcome::Lines(vec!["a".to_string(), "b".to_string()])),
        &mut host,
    );

    assert_eq!(host.messages, vec!["a", "b"]);
    assert!(host.error.is_none());
    assert!(host.usage.is_empty());
}

/// **VALUE**: Verifies syntax problems stay out of the command result.
///
/// **WHY THIS MATTERS**: A debugger marks a command with an error result
/// as failed. Bad arguments print usage and nothing else.
#[test]
fn given_syntax_error_when_reported_then_only_usage_is_printed() {
    // GIVEN
    let mut host = RecordingHost::default();
    let error = CommandError::Syntax {
        message: "Usage: osstatus <CODE>".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN
    report(Err(error), &mut host);

    // THEN
    assert!(host.messages.is_empty());
    assert!(host.error.is_none());
    assert_eq!(host.usage, vec!["Usage: osstatus <CODE>"]);
}

#[test]
fn given_help_when_reported_then_only_usage_is_printed() {
    let mut host = RecordingHost::default();

    report(Ok(CommandOutcome::Help("help".to_string())), &mut host);

    assert!(host.messages.is_empty());
    assert!(host.error.is_none());
    assert_eq!(host.usage, vec!["help"]);
}

/// **VALUE**: Verifies lookup failures become exactly one error and no lines.
#[test]
fn given_lookup_error_when_reported_then_sets_single_error() {
    let mut host = RecordingHost::default();

    report(
        Err(CommandError::Lookup(LookupError::status(HttpStatusCode(500)))),
        &mut host,
    );

    assert!(host.messages.is_empty());
    assert!(host.usage.is_empty());
    let error = host.error.expect("error set");
    assert_eq!(error, "Server returned HTTP status code: 500");
}

/// **VALUE**: Verifies the console gets the bare message of a lookup error.
///
/// **WHY THIS MATTERS**: The debugger console shows this text to the user.
/// Kind prefixes and source locations belong in the log file only.
///
/// **BUG THIS CATCHES**: Would catch `report` passing the full `Display`
/// (`Connection Error: ... [mod.rs:83:24]`) to the host.
#[test]
fn given_connection_error_when_reported_then_error_has_no_prefix_or_location() {
    // GIVEN
    let mut host = RecordingHost::default();
    let error = LookupError::Connection {
        message: "Unable to connect to server: connection refused".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN
    report(Err(CommandError::Lookup(error)), &mut host);

    // THEN
    assert_eq!(
        host.error.as_deref(),
        Some("Unable to connect to server: connection refused")
    );
}

/// **VALUE**: Verifies lookup failures are logged below warning level.
///
/// **BUG THIS CATCHES**: A warning would reach a console logger as well as
/// the host, showing the same failure twice.
#[test]
fn given_lookup_failure_log_level_then_is_below_warn() {
    assert!(LOOKUP_FAILURE_LOG_LEVEL > log::Level::Warn);
}
