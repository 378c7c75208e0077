//! HTTP surface of the service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, state, graceful shutdown hook)
//!     → middleware/correlation.rs (extract-or-generate ID, bind logger)
//!     → middleware/access_log.rs (inbound line, timeout race, outbound line)
//!     → users handler
//!     → response.rs (JSON envelope back to the client)
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
