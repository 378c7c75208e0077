//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     config → logging.rs (global subscriber: level floor + output mode)
//!
//! Per request:
//!     correlation middleware → request_log.rs (RequestLogger bound to the ID)
//!     each log statement     → LogCall (per-call decorations, consumed on emit)
//! ```
//!
//! # Design Decisions
//! - Global logger configuration is write-once at startup; never reconfigured
//!   per request
//! - Every line emitted while handling a request carries that request's
//!   correlation ID
//! - Liveness-probe paths are suppressed at emission time, not at call sites

pub mod logging;
pub mod request_log;

pub use logging::{fatal, init, is_excluded_path};
pub use request_log::{LogCall, RequestLogger};
