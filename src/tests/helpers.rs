// Test helper utilities for envelope-assert unit tests
//
// Reusable response and body builders shared across test modules.

use crate::response::TestResponse;
use serde_json::{json, Value};

/// Canonical success body carrying the given data payload and status.
pub fn success_body(data: Value, status: u16) -> String {
    json!({
        "success": true,
        "status": status,
        "data": data,
    })
    .to_string()
}

/// Canonical error body; the status field serializes as null when `None`.
pub fn error_body(code: &str, status: Option<u16>) -> String {
    json!({
        "success": false,
        "status": status,
        "error": { "code": code },
    })
    .to_string()
}

/// Response wrapping a canonical success body.
pub fn success_response(data: Value, status: u16) -> TestResponse {
    TestResponse::new(status, success_body(data, status))
}

/// Response wrapping a canonical error body.
///
/// The transport status falls back to 400 when the envelope carries none.
pub fn error_response(code: &str, status: Option<u16>) -> TestResponse {
    TestResponse::new(status.unwrap_or(400), error_body(code, status))
}

/// Nested payload exercised by the data-walk tests.
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
