//! HTTP test assertion primitives.
//!
//! Inherent methods on [`TestResponse`] covering the checks every other
//! assertion is built from: status code, exact JSON equality, fragment
//! containment, rooted subset, and key structure. Each method panics
//! with the rendered mismatch on failure and returns `&Self` so calls
//! chain.

use crate::logging::log_debug;
use crate::matching;
use crate::response::TestResponse;
use serde_json::Value;

impl TestResponse {
    /// Assert the HTTP status code.
    pub fn assert_status(&self, expected: u16) -> &Self {
        log_debug!(
            expected = expected,
            actual = self.status(),
            "Asserting status code"
        );
        assert_eq!(
            self.status(),
            expected,
            "expected status {}, got {} (body: {})",
            expected,
            self.status(),
            self.body()
        );
        self
    }

    /// Assert the body decodes as JSON equal to `expected`, field for field.
    pub fn assert_json_equals(&self, expected: &Value) -> &Self {
        let body = self.decoded();
        if let Err(err) = matching::match_exact(&body, expected) {
            panic!("{err}\nactual body: {body}");
        }
        self
    }

    /// Assert every key/value pair of the `fragment` object appears
    /// somewhere in the body.
    pub fn assert_json_contains(&self, fragment: &Value) -> &Self {
        let body = self.decoded();
        if let Err(err) = matching::match_contains(&body, fragment) {
            panic!("{err}\nactual body: {body}");
        }
        self
    }

    /// Assert `subset` matches the body from the root down: expected keys
    /// must exist with matching values, extra actual fields are allowed.
    pub fn assert_json_subset(&self, subset: &Value) -> &Self {
        let body = self.decoded();
        if let Err(err) = matching::match_subset(&body, subset) {
            panic!("{err}\nactual body: {body}");
        }
        self
    }

    /// Assert the body has the given key structure, ignoring values.
    pub fn assert_json_structure(&self, structure: &Value) -> &Self {
        let body = self.decoded();
        if let Err(err) = matching::match_structure(&body, structure) {
            panic!("{err}\nactual body: {body}");
        }
        self
    }

    /// Decode the body or fail the test with the decode error.
    pub(crate) fn decoded(&self) -> Value {
        match self.json() {
            Ok(value) => value,
            Err(err) => panic!("{err}\nactual body: {}", self.body()),
        }
    }
}
