//! Waitline - Main Entry Point
//! In-memory queue registry served over HTTP

mod logging;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

// Import workspace crates
use waitline_api_http::{HttpServer, HttpServerConfig};
use waitline_core::application::QueueService;
use waitline_core::port::id_provider::RandomIdProvider;
use waitline_core::port::time_provider::SystemTimeProvider;
use waitline_infra_memory::InMemoryQueueRepository;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    logging::init_logging(logging::LogFormat::from_env())?;

    info!("Waitline v{} starting...", VERSION);

    // 2. Load configuration
    let http_config = HttpServerConfig::from_env().context("Invalid HTTP configuration")?;

    // 3. Setup dependencies (DI wiring)
    let queue_repo = Arc::new(InMemoryQueueRepository::new());
    let id_provider = Arc::new(RandomIdProvider);
    let time_provider = Arc::new(SystemTimeProvider);
    let service = Arc::new(QueueService::new(queue_repo, id_provider, time_provider));

    // 4. Start HTTP server
    let (addr, server) = HttpServer::new(http_config, service)
        .bind()
        .await
        .context("HTTP server bind failed")?;

    info!(%addr, "System ready. Press Ctrl+C to shutdown");

    // 5. Serve until Ctrl+C, then drain in-flight requests
    server
        .serve(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received. Exiting gracefully..."),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
