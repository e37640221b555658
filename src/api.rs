//! Envelope assertion helpers.
//!
//! [`ApiAssertions`] borrows a captured [`TestResponse`] and an injected
//! [`ResponseFormatter`] and asserts that the response follows the
//! success/error envelope the formatter produces. All assertion methods
//! return the helper so calls chain; failures panic with the rendered
//! mismatch so the test runner reports them.
//!
//! # Example
//!
//! ```rust
//! use envelope_assert::TestResponse;
//! use serde_json::json;
//!
//! let response = TestResponse::new(
//!     200,
//!     r#"{"success":true,"status":200,"data":{"user":{"id":5,"name":"Al"}}}"#,
//! );
//!
//! response
//!     .assertions()
//!     .assert_success(json!({ "user": { "id": 5, "name": "Al" } }), 200);
//! ```

use crate::envelope::ResponseEnvelope;
use crate::error::{AssertError, AssertResult};
use crate::formatter::ResponseFormatter;
use crate::logging::log_debug;
use crate::matching;
use crate::response::TestResponse;
use serde_json::{json, Map, Value};

/// Status code assumed by the success assertions when none is given.
const DEFAULT_SUCCESS_STATUS: u16 = 200;

/// Fluent envelope assertions over a captured response.
///
/// Create one via [`TestResponse::assertions`] (canonical formatter) or
/// [`TestResponse::assertions_with`] (custom formatter). The helper
/// borrows both collaborators, so it is cheap to create per assertion.
pub struct ApiAssertions<'a> {
    response: &'a TestResponse,
    formatter: &'a dyn ResponseFormatter,
}

impl<'a> ApiAssertions<'a> {
    /// Assertions over `response`, expecting envelopes built by `formatter`.
    pub fn new(response: &'a TestResponse, formatter: &'a dyn ResponseFormatter) -> Self {
        Self {
            response,
            formatter,
        }
    }

    /// Assert a success envelope and that every key/value of its data
    /// payload is present in the body.
    ///
    /// Builds the expected envelope via the formatter, asserts the status
    /// code, the top-level `success`/`status` fields, and the presence of
    /// a `data` key, then walks the envelope's data: nested objects
    /// recurse, every other value must appear as a key/value pair
    /// somewhere in the body. Extra actual fields are allowed.
    ///
    /// `status` defaults to 200 when `None`.
    pub fn assert_success(
        &self,
        data: impl Into<Option<Value>>,
        status: impl Into<Option<u16>>,
    ) -> &Self {
        let envelope = self.assert_success_response(data, status);
        if let Some(data) = envelope.data {
            self.assert_success_data(data);
        }
        self
    }

    /// Assert a success envelope and that the body equals it exactly.
    ///
    /// Like [`assert_success`](Self::assert_success), but the whole body
    /// must equal the formatter's envelope field for field; extra or
    /// missing fields fail.
    ///
    /// `status` defaults to 200 when `None`.
    pub fn assert_success_equals(
        &self,
        data: impl Into<Option<Value>>,
        status: impl Into<Option<u16>>,
    ) -> &Self {
        let envelope = self.assert_success_response(data, status);
        self.response.assert_json_equals(&envelope.to_value());
        self
    }

    /// Assert the shape shared by every success response and return the
    /// expected envelope for further inspection.
    ///
    /// Asserts the status code, top-level `success == true` and `status`,
    /// and that a `data` key is structurally present. The asserted status
    /// is the one the formatter's envelope carries, falling back to the
    /// requested status when the envelope has none.
    ///
    /// `status` defaults to 200 when `None`.
    pub fn assert_success_response(
        &self,
        data: impl Into<Option<Value>>,
        status: impl Into<Option<u16>>,
    ) -> ResponseEnvelope {
        let status = status.into().unwrap_or(DEFAULT_SUCCESS_STATUS);
        let envelope = self.formatter.success(data.into(), status);
        // The formatter may remap the requested status; its envelope is
        // what the body must match.
        let expected = envelope.status.unwrap_or(status);
        log_debug!(status = expected, "Asserting success envelope");
        self.response
            .assert_status(expected)
            .assert_json_subset(&json!({ "success": true, "status": expected }))
            .assert_json_structure(&json!(["data"]));
        envelope
    }

    /// Recursively assert that the expected data is present in the body.
    ///
    /// For each key of the expected object: nested objects recurse, every
    /// other value must appear as that key/value pair somewhere in the
    /// body. Depth is unbounded and key order is irrelevant. `None` and
    /// JSON null assert nothing.
    pub fn assert_success_data(&self, data: impl Into<Option<Value>>) -> &Self {
        if let Some(data) = data.into() {
            self.walk_data(&data);
        }
        self
    }

    /// Decode the body and return the envelope's `data` payload.
    ///
    /// # Errors
    ///
    /// Returns [`AssertError::Decode`] when the body is not valid JSON,
    /// is not a JSON object, or has no `data` key.
    pub fn success_data(&self) -> AssertResult<Value> {
        let body = self.response.json()?;
        match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => Ok(data),
                None => Err(AssertError::decode("response body has no data key")),
            },
            other => Err(AssertError::decode(format!(
                "response body is not a JSON object, got {}",
                matching::value_kind(&other)
            ))),
        }
    }

    /// Assert an error envelope carrying the given error `code`.
    ///
    /// When `status` is given, asserts the status code and the body's
    /// top-level `status` field; when omitted, the body's `status` must
    /// be null or absent. Always asserts top-level `success == false` and
    /// that the body contains `{"error": {"code": ...}}` as a subset, so
    /// extra error fields such as a message are allowed.
    pub fn assert_error(&self, code: &str, status: impl Into<Option<u16>>) -> &Self {
        let status = status.into();
        log_debug!(code = %code, status = ?status, "Asserting error envelope");
        match status {
            Some(expected) => {
                self.response
                    .assert_status(expected)
                    .assert_json_subset(&json!({ "success": false, "status": expected }));
            }
            None => {
                self.response.assert_json_subset(&json!({ "success": false }));
                self.assert_status_field_unset();
            }
        }
        self.response
            .assert_json_subset(&json!({ "error": { "code": code } }));
        self
    }

    fn walk_data(&self, data: &Value) {
        match data {
            Value::Null => {}
            Value::Object(map) => {
                for (key, value) in map {
                    if value.is_object() {
                        self.walk_data(value);
                    } else {
                        self.response.assert_json_contains(&pair(key, value));
                    }
                }
            }
            // Scalar and array payloads have no keys to walk; they must
            // appear as the data field itself.
            other => {
                self.response.assert_json_contains(&pair("data", other));
            }
        }
    }

    fn assert_status_field_unset(&self) {
        let body = self.response.decoded();
        match body.get("status") {
            None | Some(Value::Null) => {}
            Some(other) => {
                let err = AssertError::mismatch(
                    "$.status",
                    format!("expected null or absent status, got {other}"),
                );
                panic!("{err}\nactual body: {body}");
            }
        }
    }
}

fn pair(key: &str, value: &Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value.clone());
    Value::Object(map)
}
