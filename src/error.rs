//! Error types for envelope assertions.
//!
//! This module provides structured error handling for envelope-assert
//! operations. There are exactly two failure modes:
//! - An assertion mismatch: the actual JSON differs from the expected
//!   value, fragment, subset, or structure.
//! - A decode failure: the response body cannot be turned into the JSON
//!   shape an assertion needs.
//!
//! Assertion entry points panic with the rendered error so the test
//! runner reports the failure; decoding entry points such as
//! [`TestResponse::json`](crate::TestResponse::json) and
//! [`ApiAssertions::success_data`](crate::ApiAssertions::success_data)
//! return these errors for the caller to inspect.
//!
//! # Error Handling Example
//!
//! ```rust
//! use envelope_assert::TestResponse;
//!
//! let response = TestResponse::new(200, "not json");
//! let err = response.json().unwrap_err();
//!
//! assert!(err.is_decode());
//! println!("decode failed: {}", err);
//! ```
//!
//! # Result Type
//!
//! Use [`AssertResult<T>`] as a convenient alias for `Result<T, AssertError>`:
//!
//! ```rust
//! use envelope_assert::AssertResult;
//!
//! fn data_id(data: &serde_json::Value) -> AssertResult<u64> {
//!     data.get("id").and_then(serde_json::Value::as_u64).ok_or_else(|| {
//!         envelope_assert::AssertError::decode("data has no numeric id field")
//!     })
//! }
//! ```

use crate::logging::log_warn;
use thiserror::Error;

/// Convenient result type for envelope assertion operations.
///
/// Alias for `Result<T, AssertError>`.
pub type AssertResult<T> = std::result::Result<T, AssertError>;

/// Errors that can occur while asserting a response envelope.
///
/// Each variant can be:
/// - Checked for its kind via [`is_mismatch()`](Self::is_mismatch) and
///   [`is_decode()`](Self::is_decode)
/// - Inspected for the failing JSON path via [`path()`](Self::path)
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the failure:
///
/// ```rust
/// use envelope_assert::AssertError;
///
/// let err = AssertError::mismatch("$.data.name", "expected \"Al\", got \"Bob\"");
/// let err = AssertError::decode("response body is not valid JSON");
/// ```
#[derive(Error, Debug)]
pub enum AssertError {
    /// The actual JSON does not match the expected value, fragment,
    /// subset, or structure.
    ///
    /// `path` is the JSON path at which matching failed, rooted at `$`
    /// (for example `$.data.user.name` or `$.items[2]`). Fragment
    /// searches that scan the whole body report the root path.
    #[error("assertion mismatch at {path}: {message}")]
    Mismatch {
        /// JSON path where matching failed.
        path: String,
        /// Description of the difference.
        message: String,
    },

    /// The response body could not be decoded into the expected JSON shape.
    ///
    /// Raised when the body is not valid JSON, is not a JSON object
    /// where one is required, or lacks the `data` key of a success
    /// envelope.
    #[error("failed to decode response body: {message}")]
    Decode {
        /// Details about the decode failure.
        message: String,
    },
}

impl AssertError {
    /// Whether this error is an assertion mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Whether this error is a body decode failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The JSON path at which matching failed, if this is a mismatch.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Mismatch { path, .. } => Some(path),
            Self::Decode { .. } => None,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the failure at WARN level.
    // Use them instead of constructing variants directly.

    /// Create an assertion mismatch error (logs at WARN level).
    pub fn mismatch(path: impl Into<String>, message: impl Into<String>) -> Self {
        let path = path.into();
        let message = message.into();
        log_warn!(
            error_type = "mismatch",
            path = %path,
            message = %message,
            "JSON assertion mismatch"
        );
        Self::Mismatch { path, message }
    }

    /// Create a body decode error (logs at WARN level).
    pub fn decode(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "decode",
            message = %message,
            "Response body decode failed"
        );
        Self::Decode { message }
    }
}
