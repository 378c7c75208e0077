//! Correlation middleware: assigns the request's ID and binds its logger.
//!
//! # Responsibilities
//! - Extract the inbound `X-Correlation-Id` header, or generate a fresh ID
//! - Bind exactly one [`RequestLogger`] per request
//! - Expose both through [`RequestContext`] in the request extensions
//! - Reflect the ID on the response for client-side correlation
//!
//! # Design Decisions
//! - This middleware is the single writer of [`RequestContext`]; the
//!   extractor's generate-fresh fallback only fires for requests that never
//!   passed through it, so one request can never observe two IDs

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{Extensions, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::convert::Infallible;

use crate::correlation::{CorrelationId, CORRELATION_ID_HEADER};
use crate::observability::RequestLogger;

/// Immutable request-scoped state: the correlation ID and the logger bound
/// to it. Cloning shares the same bound logger.
#[derive(Clone)]
pub struct RequestContext {
    pub correlation_id: CorrelationId,
    pub logger: RequestLogger,
}

impl RequestContext {
    fn new(correlation_id: CorrelationId) -> Self {
        let logger = RequestLogger::bind(correlation_id.clone());
        Self {
            correlation_id,
            logger,
        }
    }

    /// Read the context from request extensions, falling back to a fresh
    /// context with a generated ID rather than failing.
    pub fn from_extensions(extensions: &Extensions) -> Self {
        extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| Self::new(CorrelationId::generate()))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(&parts.extensions))
    }
}

/// Ensure every request carries a correlation ID and a bound logger.
pub async fn correlation_layer(mut request: Request, next: Next) -> Response {
    let correlation_id = CorrelationId::from_headers(request.headers());
    let context = RequestContext::new(correlation_id.clone());
    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(correlation_id.as_str()) {
        response.headers_mut().insert(&CORRELATION_ID_HEADER, value);
    }
    response
}
