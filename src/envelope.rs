//! The success/error response envelope.
//!
//! Every response under test is expected to follow one fixed JSON shape:
//!
//! ```json
//! { "success": true,  "status": 200, "data": { "id": 1 } }
//! { "success": false, "status": 404, "error": { "code": "NOT_FOUND" } }
//! ```
//!
//! [`ResponseEnvelope`] models that shape. Success envelopes always carry
//! a `data` key, serialized as JSON null when there is no payload. Error
//! envelopes carry `error` and no `data`, and their `status` may be null.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured success/error response envelope.
///
/// Built by a [`ResponseFormatter`](crate::ResponseFormatter) and
/// compared against the actual response body by the assertion helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the request succeeded.
    pub success: bool,
    /// HTTP status echoed in the body. Error envelopes may carry null.
    #[serde(default)]
    pub status: Option<u16>,
    /// Success payload. Present (possibly JSON null) on success envelopes,
    /// absent on error envelopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error details. Present on error envelopes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl ResponseEnvelope {
    /// Build a success envelope carrying `data` (JSON null when `None`).
    pub fn success(data: Option<Value>, status: u16) -> Self {
        Self {
            success: true,
            status: Some(status),
            data: Some(data.unwrap_or(Value::Null)),
            error: None,
        }
    }

    /// Build an error envelope carrying the error `code`.
    pub fn error(code: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            success: false,
            status,
            data: None,
            error: Some(ErrorBody::new(code)),
        }
    }

    /// Render the envelope as a JSON value.
    ///
    /// The `status` key is always present (null when unset); `data` and
    /// `error` appear only when set, matching the wire shape.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("success".to_string(), Value::Bool(self.success));
        map.insert(
            "status".to_string(),
            match self.status {
                Some(status) => Value::from(status),
                None => Value::Null,
            },
        );
        if let Some(data) = &self.data {
            map.insert("data".to_string(), data.clone());
        }
        if let Some(error) = &self.error {
            map.insert("error".to_string(), error.to_value());
        }
        Value::Object(map)
    }
}

/// The `error` object of an error envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code, e.g. `"NOT_FOUND"`.
    pub code: String,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Error body with a code and no message.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
        }
    }

    /// Error body with a code and a human-readable message.
    pub fn with_message(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: Some(message.into()),
        }
    }

    /// Render the error body as a JSON value.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("code".to_string(), Value::String(self.code.clone()));
        if let Some(message) = &self.message {
            map.insert("message".to_string(), Value::String(message.clone()));
        }
        Value::Object(map)
    }
}
