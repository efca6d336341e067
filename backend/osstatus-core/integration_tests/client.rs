use crate::helpers::{LOOKUP_PATH, client_for, param_err_body};

use osstatus_core::error::lookup::LookupError;
use osstatus_core::{DEFAULT_USER_AGENT, OsStatusClient};

use common::HttpStatusCode;
use models::{ErrorRecord, LookupQuery, Platform};

use std::net::TcpListener;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a successful lookup sends the documented request and decodes records.
///
/// **WHY THIS MATTERS**: This is the whole wire contract: GET, `search=`,
/// identifying user agent, JSON array back.
///
/// **BUG THIS CATCHES**: Would catch a dropped user agent (the proxy
/// rejects anonymous clients), a `platform=` sent without a filter, or
/// records reordered during decoding.
#[tokio::test]
async fn given_matching_code_when_fetching_then_returns_records_in_order() {
    // GIVEN: A service that only answers the exact expected request
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(query_param("search", "-50"))
        .and(query_param_is_missing("platform"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(param_err_body()))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let records = client_for(&server)
        .fetch(&LookupQuery::new("-50"))
        .await
        .expect("lookup succeeds");

    // THEN: Order kept, nulls coalesced
    assert_eq!(
        records,
        vec![
            ErrorRecord::new(
                "paramErr",
                "error in user parameter list",
                "CarbonCore",
                "MacErrors.h"
            ),
            ErrorRecord::new("kAudioFileUnspecifiedError", "", "AudioToolbox", ""),
        ]
    );
}

#[tokio::test]
async fn given_platform_filter_when_fetching_then_sends_platform_param() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(query_param("search", "1009"))
        .and(query_param("platform", "tvOS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let query = LookupQuery::new("1009").with_platform(Some(Platform::TvOs));
    let records = client_for(&server).fetch(&query).await.expect("lookup succeeds");

    // THEN
    assert!(records.is_empty());
}

/// **VALUE**: Verifies a 500 from the service is a status error naming the code.
///
/// **BUG THIS CATCHES**: Would catch the error body being decoded as records
/// or the status being reported as a connection failure.
#[tokio::test]
async fn given_server_error_when_fetching_then_returns_status_error_with_code() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    // WHEN
    let result = client_for(&server).fetch(&LookupQuery::new("-50")).await;

    // THEN
    let error = result.expect_err("500 must fail");
    assert_eq!(error.http_status(), Some(HttpStatusCode(500)));
    assert!(error.to_string().contains("500"));
    assert!(matches!(error, LookupError::Status { .. }));
}

#[tokio::test]
async fn given_not_found_when_fetching_then_returns_client_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch(&LookupQuery::new("-50"))
        .await
        .expect_err("404 must fail");

    assert_eq!(error.http_status(), Some(HttpStatusCode(404)));
    assert_eq!(error.message(), "Server returned HTTP status code: 404");
}

/// **VALUE**: Verifies a non-JSON body is a decode error.
#[tokio::test]
async fn given_html_body_when_fetching_then_returns_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch(&LookupQuery::new("-50"))
        .await
        .expect_err("HTML is not a record list");

    assert!(matches!(error, LookupError::Decode { .. }), "got {error:?}");
}

/// **VALUE**: Verifies valid JSON of the wrong shape is also a decode error.
///
/// **WHY THIS MATTERS**: Proxies answer failures with `{"message": ...}`
/// objects and a 200 status.
#[tokio::test]
async fn given_json_object_body_when_fetching_then_returns_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Internal server error" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch(&LookupQuery::new("-50"))
        .await
        .expect_err("object is not a record list");

    assert!(matches!(error, LookupError::Decode { .. }), "got {error:?}");
}

/// **VALUE**: Verifies a refused connection is reported as a connection error.
///
/// **BUG THIS CATCHES**: Would catch transport failures being lumped in with
/// HTTP status failures, which hides "you are offline" from the user.
#[tokio::test]
async fn given_unreachable_server_when_fetching_then_returns_connection_error() {
    // GIVEN: A port that was free a moment ago and has no listener now
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let client = OsStatusClient::new(&format!("http://127.0.0.1:{port}{LOOKUP_PATH}"))
        .expect("valid base URL");

    // WHEN
    let error = client
        .fetch(&LookupQuery::new("-50"))
        .await
        .expect_err("nothing is listening");

    // THEN
    match error {
        LookupError::Connection { message, .. } => {
            assert!(message.starts_with("Unable to connect to server"));
        }
        other => panic!("Expected connection error, got {other:?}"),
    }
}

/// **VALUE**: Verifies the configured timeout bounds a hanging lookup.
#[tokio::test]
async fn given_slow_server_when_fetching_then_times_out_as_connection_error() {
    // GIVEN: A response delayed past the client timeout
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let client = OsStatusClient::with_settings(
        &format!("{}{}", server.uri(), LOOKUP_PATH),
        DEFAULT_USER_AGENT,
        Duration::from_millis(200),
    )
    .expect("valid settings");

    // WHEN
    let error = client
        .fetch(&LookupQuery::new("-50"))
        .await
        .expect_err("must time out");

    // THEN
    assert!(matches!(error, LookupError::Connection { .. }), "got {error:?}");
}

#[tokio::test]
async fn given_custom_user_agent_when_fetching_then_sends_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "osstatus-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = OsStatusClient::with_settings(
        &format!("{}{}", server.uri(), LOOKUP_PATH),
        "osstatus-tests",
        Duration::from_secs(5),
    )
    .expect("valid settings");

    let records = client.fetch(&LookupQuery::new("0")).await.expect("lookup succeeds");

    assert!(records.is_empty());
}
