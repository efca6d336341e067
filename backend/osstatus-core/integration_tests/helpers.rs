//! Shared fixtures for lookup integration tests.
//!
//! Every test gets its own `wiremock` server; the client is pointed at
//! `<server>/lookup` so the base URL carries a path like the real endpoint.

use osstatus_core::OsStatusClient;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const LOOKUP_PATH: &str = "/lookup";

pub fn client_for(server: &MockServer) -> OsStatusClient {
    OsStatusClient::new(&format!("{}{}", server.uri(), LOOKUP_PATH))
        .expect("mock server URI is a valid base URL")
}

/// Two records for `-50`, the second with null fields.
pub fn param_err_body() -> Value {
    json!([
        {
            "name": "paramErr",
            "description": "error in user parameter list",
            "framework": "CarbonCore",
            "header_file": "MacErrors.h"
        },
        {
            "name": "kAudioFileUnspecifiedError",
            "description": null,
            "framework": "AudioToolbox",
            "header_file": null
        }
    ])
}
