//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the chain reader and calculator from validated settings
//! - Start the metrics exporter when configured
//! - Bind the HTTP listener and serve until a shutdown signal arrives

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::blockchain::TokenClient;
use crate::config::{Settings, LOCKED_ADDRESSES};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::supply::SupplyCalculator;

/// Run the service until SIGINT/SIGTERM.
pub async fn run(settings: Settings) -> std::io::Result<()> {
    tracing::info!(
        port = settings.port,
        token = %settings.token_address,
        rpc_url = %settings.redacted_rpc_url(),
        rpc_timeout_secs = settings.rpc_timeout.as_secs(),
        locked_addresses = LOCKED_ADDRESSES.len(),
        "Configuration loaded"
    );

    if let Some(addr) = settings.metrics_address {
        metrics::init_metrics(addr);
    }

    let client = TokenClient::new(&settings);
    if let Err(e) = client.probe().await {
        tracing::warn!(error = %e, "Data provider unreachable at startup");
    }

    let calculator = Arc::new(SupplyCalculator::new(client, LOCKED_ADDRESSES));
    let server = HttpServer::new(calculator);

    let listener = TcpListener::bind(settings.bind_address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Server running"
    );

    let shutdown = Shutdown::new();
    let serve = server.run(listener, shutdown.subscribe());
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => return result,
        _ = signals::wait_for_shutdown() => shutdown.trigger(),
    }

    serve.await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
