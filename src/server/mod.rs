//! HTTP server startup.
//!
//! Binds the configured address and serves the router until Ctrl+C or
//! SIGTERM, then drains in-flight requests before returning.

mod shutdown;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::HttpServerConfig;

pub use shutdown::shutdown_signal;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Address(String),

    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config
        .authority()
        .parse()
        .map_err(|e: std::net::AddrParseError| ServerError::Address(e.to_string()))?;

    let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
