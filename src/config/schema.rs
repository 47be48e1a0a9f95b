//! Validated runtime settings.

use alloy::primitives::{address, Address};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use url::Url;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Provider endpoint prefix; the API key is appended as the last path segment.
pub const DEFAULT_RPC_URL: &str = "https://eth-mainnet.g.alchemy.com/v2/";

/// Per-call RPC timeout when `RPC_TIMEOUT_SECS` is unset.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

/// Addresses whose balances are excluded from circulating supply.
pub const LOCKED_ADDRESSES: [Address; 2] = [
    address!("7eab1c8a3e722fe477e28c7cdc7f954a54ea3213"),
    address!("05b2607d070f9206eb595c0596fd78748751a8e7"),
];

/// Root settings for the service.
#[derive(Clone)]
pub struct Settings {
    /// HTTP listening port.
    pub port: u16,

    /// Token contract queried for supply and balances.
    pub token_address: Address,

    /// Full provider endpoint, API key included.
    pub rpc_url: Url,

    /// Timeout applied to every contract call.
    pub rpc_timeout: Duration,

    /// Prometheus exporter bind address. `None` disables the exporter.
    pub metrics_address: Option<SocketAddr>,
}

impl Settings {
    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Provider endpoint with the API key path segment masked, for logging.
    pub fn redacted_rpc_url(&self) -> String {
        let mut url = self.rpc_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop().push("***");
        }
        url.to_string()
    }
}

// Hand-written so the API key never lands in a log line.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("port", &self.port)
            .field("token_address", &self.token_address)
            .field("rpc_url", &self.redacted_rpc_url())
            .field("rpc_timeout", &self.rpc_timeout)
            .field("metrics_address", &self.metrics_address)
            .finish()
    }
}
