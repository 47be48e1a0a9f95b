//! Circulating supply service library.

pub mod blockchain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod supply;

pub use config::Settings;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use supply::SupplyCalculator;
