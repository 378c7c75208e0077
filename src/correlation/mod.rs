//! Correlation ID generation and extraction.
//!
//! # Responsibilities
//! - Generate a unique-enough ID when a request arrives without one
//! - Trust and reuse an ID supplied by the upstream caller
//! - Provide the header name shared by middleware and tests
//!
//! # Design Decisions
//! - Format is `CID-<YYYYMMDDHHMMSS>-<6-digit-random>`: sortable by time,
//!   grep-friendly, not cryptographically unique
//! - Supplied IDs are accepted verbatim; the upstream is trusted and a
//!   dropped ID is worse than an oddly shaped one

use std::fmt;

use axum::http::{HeaderMap, HeaderName};
use rand::Rng;

/// Inbound/outbound header carrying the correlation ID.
pub static CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Opaque per-request correlation identifier.
///
/// Immutable once assigned; lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh ID from the current local time and a random suffix.
    pub fn generate() -> Self {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        let suffix: u32 = rand::thread_rng().gen_range(100_000..=999_999);
        Self(format!("CID-{timestamp}-{suffix}"))
    }

    /// Use the inbound header value if present and non-empty, otherwise generate.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(&CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_else(Self::generate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
