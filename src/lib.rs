//! Directory proxy service library.
//!
//! One REST endpoint proxying lookups to an external user-directory API,
//! wrapped in request-scoped infrastructure: correlation IDs, a per-request
//! bound structured logger, access logging with status capture, and graceful
//! shutdown with a bounded drain.

pub mod config;
pub mod correlation;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod users;

pub use config::ServiceConfig;
pub use correlation::CorrelationId;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
