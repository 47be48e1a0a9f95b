//! Configuration loading from the environment and command line.

use alloy::primitives::Address;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::schema::{Settings, DEFAULT_PORT, DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL};

/// Errors that prevent the service from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting was not supplied.
    #[error("{0} is not set")]
    Missing(&'static str),

    /// The token address is not a 20-byte hex address.
    #[error("Invalid token address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    /// The provider endpoint could not be built.
    #[error("Invalid RPC URL '{value}': {reason}")]
    InvalidRpcUrl { value: String, reason: String },

    /// The metrics exporter address is not a socket address.
    #[error("Invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    /// A zero timeout would fail every call.
    #[error("RPC timeout must be greater than zero")]
    ZeroTimeout,
}

/// Raw startup arguments. Every flag falls back to its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "circulating-supply")]
#[command(about = "Serves the circulating supply of an ERC-20 token over HTTP", long_about = None)]
pub struct Args {
    /// HTTP listening port.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Token contract address.
    #[arg(long, env = "TOKEN_ADDRESS")]
    pub token_address: Option<String>,

    /// Data provider API key, appended to the RPC URL.
    #[arg(long, env = "PROVIDER_API_KEY", hide_env_values = true)]
    pub provider_api_key: Option<String>,

    /// Data provider JSON-RPC endpoint prefix.
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Timeout for each contract call, in seconds.
    #[arg(long, env = "RPC_TIMEOUT_SECS", default_value_t = DEFAULT_RPC_TIMEOUT_SECS)]
    pub rpc_timeout_secs: u64,

    /// Bind address for the Prometheus exporter (disabled when unset).
    #[arg(long, env = "METRICS_ADDRESS")]
    pub metrics_address: Option<String>,
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let token = required(args.token_address, "TOKEN_ADDRESS")?;
        let api_key = required(args.provider_api_key, "PROVIDER_API_KEY")?;

        let token_address = token
            .parse::<Address>()
            .map_err(|e| ConfigError::InvalidAddress {
                value: token.clone(),
                reason: e.to_string(),
            })?;

        let rpc_url = provider_url(&args.rpc_url, &api_key)?;

        if args.rpc_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let metrics_address = match args.metrics_address.filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidMetricsAddress(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Settings {
            port: args.port,
            token_address,
            rpc_url,
            rpc_timeout: Duration::from_secs(args.rpc_timeout_secs),
            metrics_address,
        })
    }
}

/// Parse arguments from the process environment and validate them.
pub fn load_settings() -> Result<Settings, ConfigError> {
    Settings::try_from(Args::parse())
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Append the API key to the endpoint prefix as its final path segment.
fn provider_url(base: &str, api_key: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidRpcUrl {
        value: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .push(api_key);

    Ok(url)
}
