//! Drives the binary's wiring against a mock lookup service and checks what
//! lands on stdout and stderr.

use osstatus::host::TerminalHost;
use osstatus::setup::build_command;

use osstatus_core::{LookupConfig, OsStatusCommand, Styling};

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOOKUP_PATH: &str = "/lookup";

fn command_for(server: &MockServer) -> OsStatusCommand {
    let config = LookupConfig {
        base_url: format!("{}{}", server.uri(), LOOKUP_PATH),
        user_agent: String::from("osstatus-cli-test"),
        ..LookupConfig::default()
    };
    config.validate().expect("mock config is valid");
    build_command(&config, Styling::Plain).expect("command")
}

async fn run(command: &OsStatusCommand, args: &[&str]) -> (String, String, bool) {
    let mut host = TerminalHost::new(Vec::new(), Vec::new());
    command.execute_args(args.iter().copied(), &mut host).await;
    let failed = host.failed();
    let (out, err) = host.into_parts();
    (
        String::from_utf8(out).expect("utf-8 stdout"),
        String::from_utf8(err).expect("utf-8 stderr"),
        failed,
    )
}

/// **VALUE**: End-to-end: argv → configured request → plain stdout lines.
///
/// **WHY THIS MATTERS**: This is the exact output of `osstatus -v -50` in a
/// shell, including the configured user agent reaching the service.
#[tokio::test]
async fn given_argv_when_executed_then_results_are_written_to_stdout() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(query_param("search", "-50"))
        .and(header("user-agent", "osstatus-cli-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "paramErr",
                "description": "error in user parameter list",
                "framework": "CarbonCore",
                "header_file": "MacErrors.h"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let command = command_for(&server);

    // WHEN
    let (out, err, failed) = run(&command, &["-v", "-50"]).await;

    // THEN
    assert!(!failed);
    assert!(err.is_empty(), "unexpected stderr: {err}");
    assert_eq!(
        out,
        "paramErr CarbonCore(MacErrors.h)\n    error in user parameter list\n"
    );
}

/// **VALUE**: Verifies a failed lookup exits through stderr only.
///
/// **BUG THIS CATCHES**: Would catch partial results being printed before
/// the error, or the failure not being reflected in the exit status.
#[tokio::test]
async fn given_server_error_when_executed_then_single_error_on_stderr() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let command = command_for(&server);

    // WHEN
    let (out, err, failed) = run(&command, &["-50"]).await;

    // THEN
    assert!(failed);
    assert!(out.is_empty());
    assert_eq!(err, "error: Server returned HTTP status code: 500\n");
}

#[tokio::test]
async fn given_no_arguments_when_executed_then_usage_without_request() {
    // GIVEN: Any request would fail the expectation
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let command = command_for(&server);

    // WHEN
    let (out, err, failed) = run(&command, &[]).await;

    // THEN: Usage is not an error
    assert!(!failed);
    assert!(err.is_empty());
    assert!(out.contains("osstatus"));
}

#[tokio::test]
async fn given_unknown_platform_when_executed_then_usage_and_no_request() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let command = command_for(&server);

    // WHEN
    let (out, err, failed) = run(&command, &["-p", "android", "-50"]).await;

    // THEN: Syntax problems print usage and stay silent on stderr
    assert!(!failed);
    assert!(err.is_empty());
    assert!(!out.is_empty());
}

#[tokio::test]
async fn given_no_matches_when_executed_then_prints_nothing() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("search", "123456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let command = command_for(&server);

    // WHEN
    let (out, err, failed) = run(&command, &["123456"]).await;

    // THEN
    assert!(!failed);
    assert!(out.is_empty());
    assert!(err.is_empty());
}
