//! Structured logging.
//!
//! Uses the `tracing` registry with an `EnvFilter` taken from `RUST_LOG`,
//! falling back to [`DEFAULT_DIRECTIVES`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "circulating_supply=info,tower_http=info";

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVES.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
