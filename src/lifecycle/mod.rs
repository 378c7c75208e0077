//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Serving:
//!     server task runs; main blocks on signals.rs
//!
//! Draining (signals.rs fired):
//!     Shutdown::trigger → server stops accepting → in-flight handlers finish
//!     shutdown.rs bounds the drain with a deadline
//!
//! Stopped | ForceStopped:
//!     drain finished in time → clean exit 0
//!     deadline elapsed → fatal log, exit non-zero
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{drain, DrainOutcome, Shutdown};
