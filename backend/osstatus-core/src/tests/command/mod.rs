mod host;

use crate::client::OsStatusClient;
use crate::command::{CommandOutcome, OsStatusCommand};
use crate::error::command::CommandError;
use crate::error::lookup::LookupError;
use crate::formatter::Styling;

// Nothing listens here; tests in this module must fail before any request.
const UNUSED_BASE_URL: &str = "http://127.0.0.1:9/lookup";

fn offline_command() -> OsStatusCommand {
    OsStatusCommand::new(
        OsStatusClient::new(UNUSED_BASE_URL).expect("valid base URL"),
        Styling::Plain,
    )
}

/// **VALUE**: Verifies an empty command line shows help instead of failing.
///
/// **WHY THIS MATTERS**: Typing just `osstatus` in a debugger is how people
/// discover the flags. It must not be treated as an error.
#[tokio::test]
async fn given_empty_line_when_run_then_returns_help() {
    // GIVEN
    let command = offline_command();

    // WHEN
    let outcome = command.run("   ").await.expect("help is not an error");

    // THEN
    match outcome {
        CommandOutcome::Help(help) => {
            assert!(help.contains("osstatus"));
            assert!(help.contains("--verbose"));
            assert!(help.contains("--platform"));
        }
        other => panic!("Expected help, got {other:?}"),
    }
}

#[tokio::test]
async fn given_help_flag_when_run_then_returns_help() {
    let outcome = offline_command().run("--help").await.expect("help");

    assert!(matches!(outcome, CommandOutcome::Help(_)));
}

/// **VALUE**: Verifies unknown flags become a syntax error, not a lookup.
///
/// **BUG THIS CATCHES**: Would catch bad input being forwarded to the
/// service (a request to port 9 here would yield a connection error).
#[tokio::test]
async fn given_unknown_flag_when_run_then_returns_syntax_error() {
    let result = offline_command().run("-50 --bogus").await;

    match result {
        Err(CommandError::Syntax { message, .. }) => {
            assert!(message.contains("--bogus"));
            assert!(message.contains("Usage"));
        }
        other => panic!("Expected syntax error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unbalanced_quote_when_run_then_returns_syntax_error() {
    let result = offline_command().run("\"errSecItemNotFound").await;

    assert!(matches!(result, Err(CommandError::Syntax { .. })));
}

#[tokio::test]
async fn given_blank_quoted_code_when_run_then_returns_query_error() {
    let result = offline_command().run("\"  \"").await;

    assert!(matches!(
        result,
        Err(CommandError::Lookup(LookupError::Query { .. }))
    ));
}

#[tokio::test]
async fn given_no_tokens_when_run_args_then_returns_help() {
    let outcome = offline_command()
        .run_args(Vec::<String>::new())
        .await
        .expect("help");

    assert!(matches!(outcome, CommandOutcome::Help(_)));
}

#[test]
fn given_command_when_created_then_keeps_styling() {
    let command = OsStatusCommand::new(
        OsStatusClient::new(UNUSED_BASE_URL).expect("valid base URL"),
        Styling::Ansi,
    );

    assert_eq!(command.styling(), Styling::Ansi);
}
