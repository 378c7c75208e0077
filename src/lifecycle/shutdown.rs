//! Shutdown coordination for the service.

use std::io;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel the serving task subscribes to; triggering
/// it tells the server to stop accepting connections and begin draining.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of the bounded drain.
#[derive(Debug)]
pub enum DrainOutcome {
    /// All in-flight requests finished before the deadline.
    Completed(io::Result<()>),
    /// The deadline elapsed with requests still in flight.
    TimedOut,
}

/// Wait for the serving task to finish draining, bounded by `deadline`.
pub async fn drain(server: JoinHandle<io::Result<()>>, deadline: Duration) -> DrainOutcome {
    match tokio::time::timeout(deadline, server).await {
        Ok(Ok(result)) => DrainOutcome::Completed(result),
        Ok(Err(join_err)) => DrainOutcome::Completed(Err(io::Error::other(join_err))),
        Err(_elapsed) => DrainOutcome::TimedOut,
    }
}
