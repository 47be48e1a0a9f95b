//! Supply values, per-address readings and computation errors.

use alloy::primitives::{Address, U256, U512};
use thiserror::Error;

use crate::blockchain::ProviderError;

/// Circulating supply in token base units, as sign and magnitude.
///
/// The magnitude is 512 bits wide so neither a full-range `totalSupply` nor
/// a locked sum above `U256::MAX` can overflow. Locked balances exceeding
/// total supply yield a negative value, which is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CirculatingSupply {
    negative: bool,
    magnitude: U512,
}

impl CirculatingSupply {
    /// `total - locked`.
    pub fn from_parts(total: U256, locked: U512) -> Self {
        let total = U512::from(total);
        if total >= locked {
            Self {
                negative: false,
                magnitude: total - locked,
            }
        } else {
            Self {
                negative: true,
                magnitude: locked - total,
            }
        }
    }

    /// True only for strictly negative values; zero is never negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> U512 {
        self.magnitude
    }
}

impl std::fmt::Display for CirculatingSupply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

/// Outcome of one locked-address balance fetch.
#[derive(Debug, Clone)]
pub struct BalanceReading {
    pub address: Address,
    pub result: Result<U256, ProviderError>,
}

/// Errors that abort a computation.
#[derive(Debug, Error)]
pub enum ComputationError {
    /// Total supply could not be fetched.
    #[error("Failed to fetch total supply: {0}")]
    TotalSupply(#[source] ProviderError),
}
