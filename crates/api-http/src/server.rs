//! HTTP Server
//!
//! Binds the router to a TCP listener and serves until the shutdown future
//! resolves.

use crate::handler::{self, ApiState};
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use waitline_core::application::QueueService;
use waitline_core::error::{AppError, Result};

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 5000;

pub const ENV_HTTP_HOST: &str = "WAITLINE_HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "WAITLINE_HTTP_PORT";

/// HTTP Server Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Defaults overridden by `WAITLINE_HTTP_HOST` / `WAITLINE_HTTP_PORT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HTTP_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_HTTP_PORT) {
            config.port = port.parse().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a port number, got {:?}",
                    ENV_HTTP_PORT, port
                ))
            })?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the router with every endpoint, permissive CORS and request tracing
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/api/stats", get(handler::stats))
        .route("/api/create_queue", post(handler::create_queue))
        .route("/api/join_queue", post(handler::join_queue))
        .route("/api/get_queue/:queue_id", get(handler::get_queue))
        .route("/api/call_next/:queue_id", post(handler::call_next))
        .route("/api/remove_person", post(handler::remove_person))
        .route("/api/end_queue/:queue_id", post(handler::end_queue))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    state: ApiState,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: Arc<QueueService>) -> Self {
        Self {
            config,
            state: ApiState::new(service),
        }
    }

    /// Bind the listener, returning the bound address and a serve future
    pub async fn bind(self) -> std::io::Result<(SocketAddr, BoundServer)> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;

        info!(
            host = %self.config.host,
            port = local_addr.port(),
            "HTTP server listening"
        );

        Ok((
            local_addr,
            BoundServer {
                listener,
                router: create_router(self.state),
            },
        ))
    }
}

/// A bound, not yet serving, HTTP server
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
}

impl BoundServer {
    /// Serve requests until `shutdown` resolves, then drain in-flight requests
    pub async fn serve<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
