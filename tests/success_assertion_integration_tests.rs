//! Integration Tests for Success Envelope Assertions
//!
//! UNIT UNDER TEST: ApiAssertions success operations over live responses
//!
//! BUSINESS RESPONSIBILITY:
//!   - Capture a live HTTP response and assert it follows the success
//!     envelope the injected formatter produces
//!   - Walk nested payloads key by key with extra fields tolerated
//!   - Enforce exact envelope equality when asked
//!   - Extract the data payload with inspectable decode errors
//!
//! TEST COVERAGE:
//!   - End-to-end capture via reqwest against a wiremock server
//!   - assert_success with nested data, default status, and mismatches
//!   - assert_success_equals extra-field rejection
//!   - assert_success_response envelope return value
//!   - success_data extraction and decode failure modes
//!   - Custom formatter injection end to end

use envelope_assert::{ResponseEnvelope, ResponseFormatter};
use serde_json::{json, Value};
use wiremock::MockServer;

mod common;
use common::*;

/// Formatter of a service that nests every payload under a result key.
struct WrappingFormatter;

impl ResponseFormatter for WrappingFormatter {
    fn success(&self, data: Option<Value>, status: u16) -> ResponseEnvelope {
        ResponseEnvelope::success(Some(json!({ "result": data })), status)
    }

    fn error(&self, code: &str, status: Option<u16>) -> ResponseEnvelope {
        ResponseEnvelope::error(code, status)
    }
}

#[tokio::test]
async fn test_assert_success_against_live_response() {
    // Full path: serve an envelope, fetch it, assert envelope and data
    // Verifies capture, envelope checks, and the recursive walk together

    let server = MockServer::start().await;
    serve(&server, "/users/5", 200, success_body(user_payload(), 200)).await;

    let response = fetch(&server, "/users/5").await;

    response
        .assertions()
        .assert_success(user_payload(), 200)
        .assert_success_data(json!({"user": {"address": {"city": "Oslo"}}}));
}

#[tokio::test]
async fn test_assert_success_defaults_to_status_200() {
    let server = MockServer::start().await;
    serve(&server, "/ping", 200, success_body(json!({"pong": true}), 200)).await;

    let response = fetch(&server, "/ping").await;

    response.assertions().assert_success(json!({"pong": true}), None);
}

#[tokio::test]
async fn test_assert_success_with_created_status() {
    let server = MockServer::start().await;
    serve(&server, "/users", 201, success_body(json!({"id": 99}), 201)).await;

    let response = fetch(&server, "/users").await;

    response.assertions().assert_success(json!({"id": 99}), 201);
}

#[tokio::test]
#[should_panic(expected = "no object in body has the pair \"name\": \"Al\"")]
async fn test_assert_success_panics_on_payload_difference() {
    // The served body carries a different nested value than expected
    // Verifies the failure names the differing field

    let server = MockServer::start().await;
    let body = success_body(json!({"user": {"id": 5, "name": "Bob"}}), 200);
    serve(&server, "/users/5", 200, body).await;

    let response = fetch(&server, "/users/5").await;

    response
        .assertions()
        .assert_success(json!({"user": {"id": 5, "name": "Al"}}), 200);
}

#[tokio::test]
async fn test_assert_success_equals_against_live_response() {
    let server = MockServer::start().await;
    serve(&server, "/users/7", 200, success_body(json!({"id": 7}), 200)).await;

    let response = fetch(&server, "/users/7").await;

    response.assertions().assert_success_equals(json!({"id": 7}), 200);
}

#[tokio::test]
#[should_panic(expected = "unexpected key")]
async fn test_assert_success_equals_rejects_undeclared_fields() {
    // The service tacks a meta object onto the envelope
    // Verifies exact matching rejects fields the formatter never adds

    let server = MockServer::start().await;
    let mut body = success_body(json!({"id": 7}), 200);
    body["meta"] = json!({"page": 1});
    serve(&server, "/users/7", 200, body).await;

    let response = fetch(&server, "/users/7").await;

    response.assertions().assert_success_equals(json!({"id": 7}), 200);
}

#[tokio::test]
async fn test_assert_success_response_returns_the_envelope() {
    let server = MockServer::start().await;
    serve(&server, "/orders/3", 200, success_body(json!({"total": 40}), 200)).await;

    let response = fetch(&server, "/orders/3").await;

    let envelope = response
        .assertions()
        .assert_success_response(json!({"total": 40}), 200);

    assert!(envelope.success);
    assert_eq!(envelope.data, Some(json!({"total": 40})));
}

#[tokio::test]
async fn test_success_data_extraction_from_live_response() {
    let server = MockServer::start().await;
    serve(&server, "/users/5", 200, success_body(user_payload(), 200)).await;

    let response = fetch(&server, "/users/5").await;

    let data = response.assertions().success_data().unwrap();
    assert_eq!(data["user"]["name"], "Al");
    assert_eq!(data["roles"][0], "admin");
}

#[tokio::test]
async fn test_success_data_decode_error_on_html_body() {
    // Proxies and gateways love returning HTML error pages
    // Verifies the decode failure is returned, not panicked

    let server = MockServer::start().await;
    serve_raw(&server, "/broken", 200, "<html>bad gateway</html>").await;

    let response = fetch(&server, "/broken").await;

    let err = response.assertions().success_data().unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_custom_formatter_end_to_end() {
    // A service whose formatter wraps payloads under a result key
    // Verifies injected formatters drive the expected envelope

    let server = MockServer::start().await;
    let body = success_body(json!({"result": {"id": 1}}), 200);
    serve(&server, "/wrapped", 200, body).await;

    let response = fetch(&server, "/wrapped").await;

    response
        .assertions_with(&WrappingFormatter)
        .assert_success_equals(json!({"id": 1}), 200);
}
