//! The response under test.

use crate::api::ApiAssertions;
use crate::error::{AssertError, AssertResult};
use crate::formatter::{ResponseFormatter, DEFAULT_FORMATTER};
use crate::logging::log_debug;
use serde_json::Value;

/// An HTTP response captured for assertion: status code plus raw body.
///
/// The running test owns the response; assertion helpers borrow it, so
/// one captured response can back any number of assertions.
///
/// # Example
///
/// ```rust
/// use envelope_assert::TestResponse;
/// use serde_json::json;
///
/// let response = TestResponse::new(200, r#"{"success":true,"status":200,"data":{"id":1}}"#);
/// response
///     .assert_status(200)
///     .assert_json_contains(&json!({ "id": 1 }));
/// ```
#[derive(Debug, Clone)]
pub struct TestResponse {
    status: u16,
    body: String,
}

impl TestResponse {
    /// Capture a response from its status code and raw body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Capture a live `reqwest` response (status code plus text body).
    ///
    /// # Errors
    ///
    /// Returns [`AssertError::Decode`] when the body cannot be read.
    pub async fn from_reqwest(response: reqwest::Response) -> AssertResult<Self> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| AssertError::decode(format!("failed to read response body: {err}")))?;
        log_debug!(
            status = status,
            body_length = body.len(),
            "Captured response for assertion"
        );
        Ok(Self { status, body })
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AssertError::Decode`] when the body is not valid JSON.
    pub fn json(&self) -> AssertResult<Value> {
        serde_json::from_str(&self.body)
            .map_err(|err| AssertError::decode(format!("response body is not valid JSON: {err}")))
    }

    /// Envelope assertions against the canonical formatter.
    pub fn assertions(&self) -> ApiAssertions<'_> {
        ApiAssertions::new(self, &DEFAULT_FORMATTER)
    }

    /// Envelope assertions against a custom formatter.
    pub fn assertions_with<'a>(&'a self, formatter: &'a dyn ResponseFormatter) -> ApiAssertions<'a> {
        ApiAssertions::new(self, formatter)
    }
}
