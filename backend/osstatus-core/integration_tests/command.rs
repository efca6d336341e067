use crate::helpers::{LOOKUP_PATH, param_err_body};

use osstatus_core::error::command::CommandError;
use osstatus_core::error::lookup::LookupError;
use osstatus_core::{CommandHost, CommandOutcome, OsStatusClient, OsStatusCommand, Styling};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct ConsoleHost {
    messages: Vec<String>,
    error: Option<String>,
    usage: Vec<String>,
}

impl CommandHost for ConsoleHost {
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

fn command_for(server: &MockServer, styling: Styling) -> OsStatusCommand {
    let client = OsStatusClient::new(&format!("{}{}", server.uri(), LOOKUP_PATH))
        .expect("valid base URL");
    OsStatusCommand::new(client, styling)
}

/// **VALUE**: End-to-end: command line → request → aligned, verbose lines.
///
/// **WHY THIS MATTERS**: This is exactly what a user sees after typing
/// `osstatus -v -50` in a terminal debugger session.
#[tokio::test]
async fn given_verbose_command_when_run_then_returns_aligned_lines_with_description() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(query_param("search", "-50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(param_err_body()))
        .expect(1)
        .mount(&server)
        .await;
    let command = command_for(&server, Styling::Plain);

    // WHEN
    let outcome = command.run("-v -50").await.expect("lookup succeeds");

    // THEN: paramErr padded to the 26-column name; only it has a description
    let CommandOutcome::Lines(lines) = outcome else {
        panic!("Expected lines");
    };
    assert_eq!(
        lines,
        vec![
            format!("{:<26} CarbonCore(MacErrors.h)", "paramErr"),
            "    error in user parameter list".to_string(),
            "kAudioFileUnspecifiedError AudioToolbox()".to_string(),
        ]
    );
}

#[tokio::test]
async fn given_platform_flag_when_run_then_request_is_filtered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("search", "1009"))
        .and(query_param("platform", "iOS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "NSURLErrorNotConnectedToInternet", "framework": "Foundation", "header_file": "NSURLError.h" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = command_for(&server, Styling::Plain)
        .run("1009 --platform ios")
        .await
        .expect("lookup succeeds");

    assert_eq!(
        outcome,
        CommandOutcome::Lines(vec![
            "NSURLErrorNotConnectedToInternet Foundation(NSURLError.h)".to_string()
        ])
    );
}

/// **VALUE**: Verifies terminal styling reaches the command output.
#[tokio::test]
async fn given_ansi_command_when_run_then_lines_are_colored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "err", "description": "", "framework": "CoreFoo", "header_file": "CoreFoo.h" }
        ])))
        .mount(&server)
        .await;

    let outcome = command_for(&server, Styling::Ansi)
        .run("err")
        .await
        .expect("lookup succeeds");

    assert_eq!(
        outcome,
        CommandOutcome::Lines(vec![
            "\x1b[91merr\x1b[0m\x1b[36m CoreFoo\x1b[0m\x1b[1m(CoreFoo.h)\x1b[0m".to_string()
        ])
    );
}

/// **VALUE**: Verifies a failed lookup is one error and zero lines at the host.
///
/// **BUG THIS CATCHES**: Would catch partial output (lines plus error) or
/// the error being swallowed.
#[tokio::test]
async fn given_server_error_when_executed_then_host_gets_single_error() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let command = command_for(&server, Styling::Plain);
    let mut host = ConsoleHost::default();

    // WHEN
    command.execute("-50", &mut host).await;

    // THEN
    assert!(host.messages.is_empty());
    assert!(host.usage.is_empty());
    let error = host.error.expect("error reported");
    assert_eq!(error, "Server returned HTTP status code: 500");
}

#[tokio::test]
async fn given_server_error_when_run_then_returns_lookup_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = command_for(&server, Styling::Plain).run("-50").await;

    assert!(matches!(
        result,
        Err(CommandError::Lookup(LookupError::Status { .. }))
    ));
}

/// **VALUE**: Verifies empty and unparseable lines are silent at the result level.
///
/// **WHY THIS MATTERS**: A debugger must not flag `osstatus` or
/// `osstatus --bogus` as a failed command; usage text is enough.
///
/// **BUG THIS CATCHES**: Would catch either case reaching the service
/// (`expect(0)` below) or setting an error.
#[tokio::test]
async fn given_empty_or_bad_lines_when_executed_then_no_output_and_no_error() {
    // GIVEN: A service that must never be called
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let command = command_for(&server, Styling::Plain);

    for line in ["", "--bogus -50", "-v"] {
        let mut host = ConsoleHost::default();

        // WHEN
        command.execute(line, &mut host).await;

        // THEN
        assert!(host.messages.is_empty(), "no output for {line:?}");
        assert!(host.error.is_none(), "no error for {line:?}");
        assert_eq!(host.usage.len(), 1, "usage shown for {line:?}");
    }
}

#[tokio::test]
async fn given_argv_tokens_when_executed_then_matches_line_behaviour() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("search", "errSecItemNotFound"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "errSecItemNotFound", "framework": "Security", "header_file": "SecBase.h" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let mut host = ConsoleHost::default();

    command_for(&server, Styling::Plain)
        .execute_args(["errSecItemNotFound"], &mut host)
        .await;

    assert_eq!(host.messages, vec!["errSecItemNotFound Security(SecBase.h)"]);
    assert!(host.error.is_none());
}
