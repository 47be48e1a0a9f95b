//! Circulating supply service.
//!
//! Serves `total supply - locked balances` of an ERC-20 token as plain text.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /            ┌──────────┐    ┌──────────────────┐    ┌──────────────┐
//!  ───────────────────▶│   http   │───▶│      supply      │───▶│  blockchain  │───▶ JSON-RPC
//!                      │  server  │    │    calculator    │    │ token reader │     provider
//!  ◀───────────────────│          │◀───│ + last known good│◀───│              │◀───
//!   200 value / 500    └──────────┘    └──────────────────┘    └──────────────┘
//!
//!   config (env / flags)   observability (tracing, metrics)   lifecycle (signals)
//! ```

use circulating_supply::config::load_settings;
use circulating_supply::lifecycle::startup;
use circulating_supply::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    logging::init_logging();

    tracing::info!("circulating-supply v{} starting", env!("CARGO_PKG_VERSION"));

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    startup::run(settings).await?;
    Ok(())
}
