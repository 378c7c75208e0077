//! Shared utilities for integration tests.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use directory_proxy::config::ServiceConfig;
use directory_proxy::http::HttpServer;
use directory_proxy::lifecycle::Shutdown;

/// Spawn the service on an ephemeral port. Returns its address, the shutdown
/// coordinator, and the serving task's handle for drain assertions.
#[allow(dead_code)]
pub async fn spawn_service(
    config: ServiceConfig,
) -> (SocketAddr, Shutdown, JoinHandle<io::Result<()>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    let task = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    (addr, shutdown, task)
}

/// Start a mock directory collaborator that answers every request with the
/// given JSON body after an optional delay.
#[allow(dead_code)]
pub async fn start_mock_directory(body: &'static str, delay: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        tokio::time::sleep(delay).await;

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// A fresh non-pooling client, so idle connections never hold the drain open.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
