//! Directory proxy service.
//!
//! # Control Flow
//! ```text
//! load env config → init logging → bind listener
//!     → spawn HTTP server task (accepts until shutdown fires)
//!     → block on SIGINT/SIGTERM
//!     → trigger shutdown, drain in-flight requests under a deadline
//!     → clean exit 0 | forced exit non-zero
//! ```

use tokio::net::TcpListener;

use directory_proxy::config;
use directory_proxy::http::HttpServer;
use directory_proxy::lifecycle::{self, drain, DrainOutcome, Shutdown};
use directory_proxy::observability::logging;

const SERVICE_NAME: &str = "directory-proxy";

#[tokio::main]
async fn main() {
    let config = config::loader::from_env();
    logging::init(&config);

    let bind_address = config.bind_address();
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => logging::fatal(format!("could not bind {bind_address}: {err}")),
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config.clone());

    tracing::info!("starting {SERVICE_NAME} on {bind_address}");
    let server_task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    lifecycle::signals::terminate().await;

    tracing::info!(
        "shutting down '{SERVICE_NAME}', waiting for ongoing requests to complete... [force shutdown in {}s]",
        config.shutdown_timeout_secs
    );
    shutdown.trigger();

    match drain(server_task, config.shutdown_timeout()).await {
        DrainOutcome::Completed(Ok(())) => {
            tracing::info!("shutdown '{SERVICE_NAME}' successfully");
        }
        DrainOutcome::Completed(Err(err)) => {
            logging::fatal(format!("server exited with an error: {err}"));
        }
        DrainOutcome::TimedOut => {
            logging::fatal("some ongoing requests were forced to close");
        }
    }
}
