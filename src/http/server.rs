//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{ConfigError, HttpServerConfig};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// Blocks until the server has shut down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = config.resolve_addr().await?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.shutdown_timeout_seconds),
    );

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
pub(crate) async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{create_router, greeting::GREETING};

    #[tokio::test]
    async fn test_serve_until_graceful_shutdown() {
        let handle = Handle::new();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let server = tokio::spawn(serve(create_router(), addr, handle.clone()));

        let bound = handle.listening().await.expect("server failed to bind");
        let body = reqwest::get(format!("http://{}/", bound))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, GREETING);

        handle.graceful_shutdown(Some(Duration::from_secs(1)));
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_start_server_rejects_invalid_address() {
        let config = HttpServerConfig {
            host: String::new(),
            port: 8080,
            shutdown_timeout_seconds: 1,
        };
        let err = start_server(create_router(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address(_)));
    }

    #[tokio::test]
    async fn test_start_server_accepts_hostname() {
        let config = HttpServerConfig {
            host: "localhost".to_string(),
            port: 0,
            shutdown_timeout_seconds: 1,
        };
        let server = tokio::spawn(async move { start_server(create_router(), &config).await });

        // A hostname that failed to resolve would end the task right away
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!server.is_finished());
        server.abort();
    }
}
