//! Service configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Process environment
//!     → loader.rs (typed getters with fallback defaults)
//!     → schema.rs (ServiceConfig struct)
//!     → injected into logging init, server state, collaborator client
//! ```
//!
//! # Design Decisions
//! - Environment-sourced, read once at startup, then immutable
//! - Missing or unparseable values fall back to documented defaults rather
//!   than aborting startup
//! - Explicit struct injection, no global singleton

pub mod loader;
pub mod schema;

pub use schema::ServiceConfig;
