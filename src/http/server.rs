//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with all handlers
//! - Wire up the middleware chain (correlation, access log, panic recovery)
//! - Hold shared application state
//! - Serve until the shutdown coordinator fires, then drain

use std::io;
use std::sync::Arc;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::ServiceConfig;
use crate::http::middleware::{access_log_layer, correlation_layer};
use crate::users;
use crate::users::service::UserService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub config: ServiceConfig,
}

/// HTTP server for the directory proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            users: Arc::new(UserService::new(&config)),
            config,
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    ///
    /// Layer order (outermost first): correlation → access log → panic
    /// recovery → handler. Correlation must run first so the access log
    /// already sees the bound logger; panic recovery sits innermost so a
    /// panicking handler still produces a 500 the access log records.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .nest("/api/users", users::handler::routes())
            .route("/health", get(health))
            .layer(CatchPanicLayer::new())
            .layer(from_fn_with_state(state.clone(), access_log_layer))
            .layer(from_fn(correlation_layer))
            .with_state(state)
    }

    /// Serve until the shutdown receiver fires, then stop accepting and let
    /// in-flight requests finish. The drain deadline is enforced by the
    /// caller, see [`crate::lifecycle::drain`].
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness probe; its access lines are suppressed by the exclusion list.
async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
