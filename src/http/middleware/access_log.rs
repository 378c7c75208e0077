//! Access-log middleware and response status capture.
//!
//! Emits exactly two lines per request: the inbound line strictly before the
//! handler runs, the outbound line strictly after it returns or is
//! cancelled. Handlers never write access lines themselves.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::http::middleware::RequestContext;
use crate::http::server::AppState;
use crate::observability::request_log::LOG_KEY_STATUS_CODE;

/// Observes the status code the handler produced without altering the
/// response. Defaults to 200; only the first recorded value sticks, a late
/// second write has no observable effect.
#[derive(Debug, Default)]
pub struct StatusCapture {
    status: Option<StatusCode>,
}

impl StatusCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the status written by the handler. Later calls are no-ops.
    pub fn record(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    /// The captured status, or 200 if the handler never wrote one.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }
}

/// Log the request on entry and exit, racing the handler against the
/// configured per-request timeout.
pub async fn access_log_layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let context = RequestContext::from_extensions(request.extensions());
    let logger = context.logger;
    let url = request.uri().to_string();
    let message = format!("[{}] {}", request.method(), url);

    logger.inbound(&url).info(&message);

    let mut capture = StatusCapture::new();
    match tokio::time::timeout(state.config.request_timeout(), next.run(request)).await {
        Ok(response) => {
            capture.record(response.status());
            let status = capture.status();
            let call = logger
                .outbound(&url)
                .field(LOG_KEY_STATUS_CODE, status.as_u16());
            if status.as_u16() < 400 {
                call.info(&message);
            } else {
                call.error(&message);
            }
            response
        }
        Err(_elapsed) => {
            // The handler future was dropped mid-flight; report the request
            // as aborted regardless of whatever it might have produced.
            logger
                .outbound(&url)
                .field(LOG_KEY_STATUS_CODE, u16::from(StatusCode::INTERNAL_SERVER_ERROR))
                .warn(&message);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
