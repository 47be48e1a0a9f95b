//! ERC-20 reader over a JSON-RPC data provider.
//!
//! # Responsibilities
//! - Connect to the configured provider endpoint
//! - Call `totalSupply()` and `balanceOf(address)` on the token contract
//! - Bound every call with the configured timeout

use alloy::contract::Error as ContractError;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainResult, ProviderError, TokenReader};
use crate::config::Settings;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }
}

/// Token contract reader backed by an alloy provider.
pub struct TokenClient {
    provider: DynProvider,
    contract: IERC20::IERC20Instance<DynProvider>,
    timeout_duration: Duration,
}

impl TokenClient {
    /// Build a reader for the configured token. Does not touch the network.
    pub fn new(settings: &Settings) -> Self {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(settings.rpc_url.clone())
            .erased();
        let contract = IERC20::new(settings.token_address, provider.clone());

        Self {
            provider,
            contract,
            timeout_duration: settings.rpc_timeout,
        }
    }

    /// Token contract address.
    pub fn token_address(&self) -> Address {
        *self.contract.address()
    }

    /// Check that the provider answers, logging the chain it serves.
    ///
    /// Failure is reported but not fatal: requests fall back to the cached
    /// value until the provider recovers.
    pub async fn probe(&self) -> BlockchainResult<u64> {
        let chain_id = match timeout(self.timeout_duration, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => id,
            Ok(Err(e)) => return Err(ProviderError::Rpc(format!("eth_chainId: {}", e))),
            Err(_) => return Err(ProviderError::Timeout(self.timeout_duration.as_secs())),
        };

        tracing::info!(
            chain_id,
            token = %self.token_address(),
            "Data provider reachable"
        );
        Ok(chain_id)
    }

    async fn guarded<F, T>(&self, method: &'static str, call: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, ContractError>>,
    {
        match timeout(self.timeout_duration, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ProviderError::Rpc(format!("{}: {}", method, e))),
            Err(_) => Err(ProviderError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl TokenReader for TokenClient {
    async fn total_supply(&self) -> BlockchainResult<U256> {
        let call = self.contract.totalSupply();
        self.guarded("totalSupply", call.call()).await
    }

    async fn balance_of(&self, owner: Address) -> BlockchainResult<U256> {
        let call = self.contract.balanceOf(owner);
        self.guarded("balanceOf", call.call()).await
    }
}

impl std::fmt::Debug for TokenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenClient")
            .field("token", &self.token_address())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
