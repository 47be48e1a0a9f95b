//! Chain reader contract and error definitions.

use alloy::primitives::{Address, U256};
use std::future::Future;
use thiserror::Error;

/// Errors from a single upstream call.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Transport failure or the provider rejected the call.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The call did not complete in time.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),
}

/// Result type for chain reads.
pub type BlockchainResult<T> = Result<T, ProviderError>;

/// Read access to a token contract.
///
/// Implementations perform exactly one upstream call per invocation and do
/// not cache.
pub trait TokenReader: Send + Sync + 'static {
    /// Total supply of the token.
    fn total_supply(&self) -> impl Future<Output = BlockchainResult<U256>> + Send;

    /// Token balance held by `owner`.
    fn balance_of(&self, owner: Address) -> impl Future<Output = BlockchainResult<U256>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = ProviderError::Rpc("rate limited".to_string());
        assert_eq!(err.to_string(), "RPC error: rate limited");
    }
}
