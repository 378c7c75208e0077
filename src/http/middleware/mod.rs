//! Request-scoped middleware chain.
//!
//! # Ordering
//! ```text
//! correlation (outermost: assigns the ID, binds the logger)
//!     → access_log (inbound line, timeout race, outbound line)
//!         → CatchPanicLayer (panicking handler becomes a 500 the
//!           access log still observes)
//!             → handler
//! ```

pub mod access_log;
pub mod correlation;

pub use access_log::access_log_layer;
pub use correlation::{correlation_layer, RequestContext};
