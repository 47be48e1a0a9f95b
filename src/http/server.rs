//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the supply handler
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown is broadcast

use axum::{extract::State, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::blockchain::TokenReader;
use crate::http::response::SupplyResponse;
use crate::supply::SupplyCalculator;

/// Application state injected into handlers.
pub struct AppState<R> {
    pub calculator: Arc<SupplyCalculator<R>>,
}

// Manual impl: `R` itself need not be `Clone`.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            calculator: self.calculator.clone(),
        }
    }
}

/// HTTP server exposing the circulating supply.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new<R: TokenReader>(calculator: Arc<SupplyCalculator<R>>) -> Self {
        let state = AppState { calculator };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router<R: TokenReader>(state: AppState<R>) -> Router {
        Router::new()
            .route("/", get(circulating_supply::<R>))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Serve on `listener` until a shutdown signal is received, then drain
    /// in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /`: one fresh computation, falling back to the last known good value.
async fn circulating_supply<R: TokenReader>(State(state): State<AppState<R>>) -> SupplyResponse {
    match state.calculator.compute().await {
        Ok(supply) => SupplyResponse::Fresh(supply),
        Err(e) => match state.calculator.last_known_good() {
            Some(stale) => {
                tracing::warn!(
                    error = %e,
                    circulating_supply = %stale,
                    "Returning last known circulating supply"
                );
                SupplyResponse::Stale(stale)
            }
            None => {
                tracing::error!(error = %e, "No previous circulating supply available");
                SupplyResponse::Unavailable
            }
        },
    }
}
