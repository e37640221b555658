//! The injected response-formatting service.
//!
//! Assertions never hardcode the envelope they expect. They ask a
//! [`ResponseFormatter`] to build it, so the expectation always tracks
//! whatever formatter the service under test uses. [`EnvelopeFormatter`]
//! is the canonical implementation; inject a custom one when the service
//! wraps responses differently.

use crate::envelope::ResponseEnvelope;
use serde_json::Value;

/// Builds the envelopes that response bodies are asserted against.
pub trait ResponseFormatter: Send + Sync {
    /// Build the success envelope for `data` with the given status code.
    ///
    /// `None` data must surface as a present-but-null `data` key.
    fn success(&self, data: Option<Value>, status: u16) -> ResponseEnvelope;

    /// Build the error envelope for an error `code`.
    ///
    /// `None` status must surface as a null `status` key.
    fn error(&self, code: &str, status: Option<u16>) -> ResponseEnvelope;
}

/// The canonical envelope formatter.
///
/// Produces `{success, status, data}` on success and
/// `{success, status, error: {code}}` on error.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeFormatter;

impl ResponseFormatter for EnvelopeFormatter {
    fn success(&self, data: Option<Value>, status: u16) -> ResponseEnvelope {
        ResponseEnvelope::success(data, status)
    }

    fn error(&self, code: &str, status: Option<u16>) -> ResponseEnvelope {
        ResponseEnvelope::error(code, status)
    }
}

/// Shared instance backing [`TestResponse::assertions`](crate::TestResponse::assertions).
pub(crate) static DEFAULT_FORMATTER: EnvelopeFormatter = EnvelopeFormatter;
