use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::SharedStorage;
use crate::router::build_router;

/// Keep record server.
pub struct KeepServer {
    config: ServerConfig,
    storage: SharedStorage,
}

impl KeepServer {
    pub fn new(config: ServerConfig, storage: SharedStorage) -> Self {
        Self { config, storage }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.storage.clone(), self.config.max_payload_bytes)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("keep server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }

    /// Bind the listener first and report the bound address, then serve.
    ///
    /// Lets callers bind to port 0 and learn the real port, which the
    /// loopback tests rely on.
    pub async fn serve_with_bound_addr(
        self,
    ) -> ServerResult<(std::net::SocketAddr, impl std::future::Future<Output = ServerResult<()>>)>
    {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!("keep server listening on {addr}");
        let fut = async move {
            axum::serve(listener, app)
                .await
                .map_err(|e| ServerError::Internal(e.to_string()))
        };
        Ok((addr, fut))
    }
}
