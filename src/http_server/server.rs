//! # HTTP Server
//!
//! Combines the album and health routers and serves them.

use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::album_routes::{album_routes, AlbumState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::observability::Event;

/// HTTP server for the album catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server on the default address
    pub fn new(state: AlbumState) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, state: AlbumState) -> Self {
        let router = Self::build_router(Arc::new(state));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(state: Arc<AlbumState>) -> Router {
        Router::new()
            .merge(album_routes(state.clone()))
            .merge(health_routes(state))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until the process is killed
    pub async fn start(self) -> io::Result<()> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(event = %Event::Serving, addr = %addr, "album service listening");
        axum::serve(listener, self.router).await
    }
}
