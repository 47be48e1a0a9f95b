//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! calculator / HTTP handler produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG)
//!     → Prometheus scrape endpoint (when METRICS_ADDRESS is set)
//! ```
//!
//! # Design Decisions
//! - Metric recording is a no-op until an exporter is installed
//! - The provider API key never appears in log fields

pub mod logging;
pub mod metrics;
