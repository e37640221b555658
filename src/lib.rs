//! # envelope-assert
//!
//! Fluent test assertions for JSON success/error response envelopes.
//!
//! ## Key Features
//!
//! - **Envelope Assertions**: Success and error envelope checks in one call
//! - **Recursive Data Matching**: Nested payloads asserted key by key
//! - **Precise Failures**: Mismatches report the exact JSON path
//! - **Injected Formatter**: Expectations track the formatter under test
//! - **Live Capture**: Build the response under test from a `reqwest` response
//!
//! ## Example
//!
//! ```rust
//! use envelope_assert::TestResponse;
//! use serde_json::json;
//!
//! let response = TestResponse::new(
//!     201,
//!     r#"{"success":true,"status":201,"data":{"id":7,"name":"Al"}}"#,
//! );
//!
//! response
//!     .assertions()
//!     .assert_success(json!({ "id": 7, "name": "Al" }), 201);
//!
//! let data = response.assertions().success_data()?;
//! assert_eq!(data["id"], 7);
//! # Ok::<(), envelope_assert::AssertError>(())
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod envelope;
pub mod error;
pub mod formatter;
pub mod response;

// Assertion primitives on TestResponse
mod assertions;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

// Recursive JSON comparison core - internal only
pub(crate) mod matching;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use api::ApiAssertions;
pub use envelope::{ErrorBody, ResponseEnvelope};
pub use error::{AssertError, AssertResult};
pub use formatter::{EnvelopeFormatter, ResponseFormatter};
pub use response::TestResponse;
