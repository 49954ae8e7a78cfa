use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use blog_store::BlogStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;

/// Blog post HTTP server.
///
/// Owns the store for the lifetime of the process; handlers share it
/// through [`AppState`].
pub struct BlogServer {
    config: ServerConfig,
    store: Arc<BlogStore>,
}

impl BlogServer {
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;
        let store = Arc::new(BlogStore::new(config.capacity));
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<BlogStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.store.clone()), self.config.request_timeout())
    }

    /// Bind the configured address and serve until SIGINT or SIGTERM.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    ///
    /// Once `shutdown` fires no new connections are accepted; in-flight
    /// requests run to completion before this returns.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        tracing::info!(
            addr = %listener.local_addr()?,
            capacity = self.config.capacity,
            "blog server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("blog server stopped");
        Ok(())
    }
}

/// Resolves on the first SIGINT (Ctrl+C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("graceful shutdown triggered");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[test]
    fn server_construction() {
        let server = BlogServer::new(ServerConfig::default()).unwrap();
        assert_eq!(server.config().port, 3000);
        assert_eq!(server.store().capacity(), 30);
        assert!(server.store().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ServerConfig {
            capacity: 0,
            ..ServerConfig::default()
        };
        assert!(matches!(BlogServer::new(config), Err(ServerError::Config(_))));
    }

    #[tokio::test]
    async fn serves_until_shutdown() {
        let server = BlogServer::new(ServerConfig::default()).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(server.serve_on(listener, async move {
            let _ = rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        assert!(raw.starts_with("HTTP/1.1 200"), "unexpected response: {raw}");
        assert!(raw.contains("x-request-id"));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
