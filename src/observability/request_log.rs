//! Per-request bound logger and its fluent call builder.
//!
//! A [`RequestLogger`] is created once per request by the correlation
//! middleware and carries the request's correlation ID for its whole
//! lifetime. Each log statement builds a throwaway [`LogCall`] that holds
//! the decorations for that one line (direction prefix, extra fields, error
//! chain) and is consumed on emission, so nothing leaks into the next call
//! and nothing is shared across tasks.

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::Level;

use crate::correlation::CorrelationId;
use crate::observability::logging::is_excluded_path;

pub const LOG_KEY_CORRELATION_ID: &str = "correlationId";
pub const LOG_KEY_RESPONSE_TIME: &str = "responseTime";
pub const LOG_KEY_STACK_TRACE: &str = "stackTrace";
pub const LOG_KEY_STATUS_CODE: &str = "status";

const INBOUND_PREFIX: &str = "INBOUND";
const OUTBOUND_PREFIX: &str = "OUTBOUND";

/// Marker substring identifying low-level HTTP client logs; flips which
/// direction gets the automatic timing field.
const HTTP_LOG_MARKER: &str = "[httplog]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Inbound,
    Outbound,
}

struct Inner {
    correlation_id: CorrelationId,
    created_at: Instant,
}

/// Logger bound to one request's correlation ID.
///
/// Cheap to clone; all clones share the same ID and creation instant.
#[derive(Clone)]
pub struct RequestLogger {
    inner: Arc<Inner>,
}

impl RequestLogger {
    /// Bind a new logger to the given correlation ID. Called exactly once
    /// per request, at ingress.
    pub fn bind(correlation_id: CorrelationId) -> Self {
        Self {
            inner: Arc::new(Inner {
                correlation_id,
                created_at: Instant::now(),
            }),
        }
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.inner.correlation_id
    }

    fn call(&self) -> LogCall<'_> {
        LogCall {
            logger: self,
            direction: None,
            suppressed: false,
            fields: Map::new(),
            cause: None,
        }
    }

    /// Start an inbound-request log call for the given URL.
    pub fn inbound(&self, url: &str) -> LogCall<'_> {
        self.call().inbound(url)
    }

    /// Start an outbound-request log call for the given URL.
    pub fn outbound(&self, url: &str) -> LogCall<'_> {
        self.call().outbound(url)
    }

    /// Start a log call carrying an error whose chain will be rendered into
    /// the structured fields.
    pub fn cause(&self, err: &dyn Error) -> LogCall<'_> {
        self.call().cause(err)
    }

    pub fn debug(&self, message: &str) {
        self.call().debug(message);
    }

    pub fn info(&self, message: &str) {
        self.call().info(message);
    }

    pub fn warn(&self, message: &str) {
        self.call().warn(message);
    }

    pub fn error(&self, message: &str) {
        self.call().error(message);
    }
}

/// One pending log statement: decorations accumulate fluently, then a
/// terminal level method emits the line and consumes the builder.
pub struct LogCall<'a> {
    logger: &'a RequestLogger,
    direction: Option<Direction>,
    suppressed: bool,
    fields: Map<String, Value>,
    cause: Option<String>,
}

impl LogCall<'_> {
    /// Mark this call as the inbound access line for `url`.
    pub fn inbound(mut self, url: &str) -> Self {
        self.direction = Some(Direction::Inbound);
        self.suppressed = is_excluded_path(url);
        self
    }

    /// Mark this call as the outbound access line for `url`.
    pub fn outbound(mut self, url: &str) -> Self {
        self.direction = Some(Direction::Outbound);
        self.suppressed = is_excluded_path(url);
        self
    }

    /// Attach one structured field. Later calls overwrite earlier values for
    /// the same key.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Merge a map of structured fields, later keys winning on collision.
    pub fn fields(mut self, fields: Map<String, Value>) -> Self {
        for (key, value) in fields {
            self.fields.insert(key, value);
        }
        self
    }

    /// Attach an error; its full source chain is rendered under the
    /// `stackTrace` field at emission.
    pub fn cause(mut self, err: &dyn Error) -> Self {
        self.cause = Some(render_chain(err));
        self
    }

    pub fn debug(self, message: &str) {
        self.emit(Level::DEBUG, message);
    }

    pub fn info(self, message: &str) {
        self.emit(Level::INFO, message);
    }

    pub fn warn(self, message: &str) {
        self.emit(Level::WARN, message);
    }

    pub fn error(self, message: &str) {
        self.emit(Level::ERROR, message);
    }

    #[cfg(test)]
    fn suppressed(&self) -> bool {
        self.suppressed
    }

    fn emit(mut self, level: Level, message: &str) {
        let message = match self.direction {
            Some(Direction::Inbound) => format!("{INBOUND_PREFIX} {message}"),
            Some(Direction::Outbound) => format!("{OUTBOUND_PREFIX} {message}"),
            None => message.to_string(),
        };

        // The outbound access line gets the elapsed time automatically; for
        // low-level http client logs it is the inbound side that closes the
        // exchange. An explicit timing field always wins.
        let is_http_log = message.contains(HTTP_LOG_MARKER);
        let timed = match self.direction {
            Some(Direction::Outbound) => !is_http_log,
            Some(Direction::Inbound) => is_http_log,
            None => false,
        };
        if timed && !self.fields.contains_key(LOG_KEY_RESPONSE_TIME) {
            let elapsed_ms = self.logger.inner.created_at.elapsed().as_millis() as u64;
            self.fields
                .insert(LOG_KEY_RESPONSE_TIME.to_string(), elapsed_ms.into());
        }

        if let Some(chain) = self.cause.take() {
            self.fields
                .insert(LOG_KEY_STACK_TRACE.to_string(), chain.into());
        }

        if self.suppressed {
            return;
        }

        let cid = self.logger.correlation_id().as_str();
        if self.fields.is_empty() {
            if level == Level::DEBUG {
                tracing::debug!(correlationId = cid, "{message}");
            } else if level == Level::WARN {
                tracing::warn!(correlationId = cid, "{message}");
            } else if level == Level::ERROR {
                tracing::error!(correlationId = cid, "{message}");
            } else {
                tracing::info!(correlationId = cid, "{message}");
            }
        } else {
            let info = Value::Object(self.fields);
            if level == Level::DEBUG {
                tracing::debug!(correlationId = cid, additionalInfo = %info, "{message}");
            } else if level == Level::WARN {
                tracing::warn!(correlationId = cid, additionalInfo = %info, "{message}");
            } else if level == Level::ERROR {
                tracing::error!(correlationId = cid, additionalInfo = %info, "{message}");
            } else {
                tracing::info!(correlationId = cid, additionalInfo = %info, "{message}");
            }
        }
    }
}

fn render_chain(err: &dyn Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
