//! Metrics collection and exposition.
//!
//! # Metrics
//! - `supply_computations_total` (counter): computations by `outcome`
//!   (`success`, `failure`)
//! - `supply_locked_balance_failures_total` (counter): balance fetches
//!   counted as zero
//! - `supply_responses_total` (counter): HTTP responses by `source`
//!   (`fresh`, `stale`, `error`)

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus exporter and its scrape listener on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one computation; `outcome` is `success` or `failure`.
pub fn record_computation(outcome: &'static str) {
    ::metrics::counter!("supply_computations_total", "outcome" => outcome).increment(1);
}

/// Count one locked balance fetch that was counted as zero.
pub fn record_locked_balance_failure() {
    ::metrics::counter!("supply_locked_balance_failures_total").increment(1);
}

/// Count one HTTP response; `source` is `fresh`, `stale` or `error`.
pub fn record_response(source: &'static str) {
    ::metrics::counter!("supply_responses_total", "source" => source).increment(1);
}
