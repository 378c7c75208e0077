//! User lookup domain.
//!
//! # Data Flow
//! ```text
//! GET /api/users/{username}
//!     → handler.rs (path extraction, envelope construction)
//!     → service.rs (first log-capable layer on failure)
//!     → repository.rs (reqwest call to the external directory API)
//!     → model.rs (typed user object)
//! ```

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use model::User;
pub use repository::{DirectoryError, UserRepository};
pub use service::UserService;
