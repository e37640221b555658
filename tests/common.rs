//! Test helper utilities for envelope-assert tests
//!
//! This module provides reusable test fixtures and helper functions
//! that are shared across multiple test modules: canonical envelope
//! bodies, wiremock routes serving them, and a fetch helper capturing
//! the live response for assertion.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use envelope_assert::TestResponse;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Envelope Body Builders
// ============================================================================

/// Canonical success body carrying the given data payload and status.
pub fn success_body(data: Value, status: u16) -> Value {
    json!({
        "success": true,
        "status": status,
        "data": data,
    })
}

/// Canonical error body; the status field serializes as null when `None`.
pub fn error_body(code: &str, status: Option<u16>) -> Value {
    json!({
        "success": false,
        "status": status,
        "error": { "code": code },
    })
}

/// Error body carrying a human-readable message next to the code.
pub fn error_body_with_message(code: &str, status: Option<u16>, message: &str) -> Value {
    json!({
        "success": false,
        "status": status,
        "error": { "code": code, "message": message },
    })
}

/// Nested payload used by the success assertion tests.
pub fn user_payload() -> Value {
    json!({
        "user": {
            "id": 5,
            "name": "Al",
            "address": { "city": "Oslo" },
        },
        "roles": ["admin", "editor"],
    })
}

// ============================================================================
// Mock Server Helpers (for wiremock)
// ============================================================================

/// Serve `body` as JSON under GET `route` with the given transport status.
pub async fn serve(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Serve a raw non-JSON body, e.g. an HTML error page.
pub async fn serve_raw(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Fetch `route` from the mock server and capture the response.
pub async fn fetch(server: &MockServer, route: &str) -> TestResponse {
    let url = format!("{}{}", server.uri(), route);
    let response = reqwest::get(&url)
        .await
        .expect("request to mock server failed");
    TestResponse::from_reqwest(response)
        .await
        .expect("failed to capture response")
}
