//! Circulating supply calculator.
//!
//! # Responsibilities
//! - Fetch total supply, then every locked balance concurrently
//! - Treat a failed balance fetch as zero (best effort)
//! - Keep the last successful value for fallback
//!
//! # Design Decisions
//! - Total supply failure aborts the run; nothing is cached
//! - Balance failures are folded to zero at the summation step and logged there
//! - No clamping: a negative result is stored and served as is

use alloy::primitives::{Address, U256, U512};
use futures_util::future::join_all;

use crate::blockchain::TokenReader;
use crate::observability::metrics;
use crate::supply::cache::LastKnownGood;
use crate::supply::types::{BalanceReading, CirculatingSupply, ComputationError};

/// Computes circulating supply from a token reader and owns the fallback slot.
pub struct SupplyCalculator<R> {
    reader: R,
    locked: Vec<Address>,
    last_known_good: LastKnownGood,
}

impl<R: TokenReader> SupplyCalculator<R> {
    /// Create a calculator with an empty fallback slot.
    pub fn new(reader: R, locked: impl Into<Vec<Address>>) -> Self {
        Self {
            reader,
            locked: locked.into(),
            last_known_good: LastKnownGood::new(),
        }
    }

    /// Run one computation. On success the value is also stored as the
    /// last known good value.
    pub async fn compute(&self) -> Result<CirculatingSupply, ComputationError> {
        match self.try_compute().await {
            Ok(supply) => {
                self.last_known_good.store(supply);
                metrics::record_computation("success");
                tracing::info!(circulating_supply = %supply, "Circulating supply computed");
                if supply.is_negative() {
                    tracing::warn!(
                        circulating_supply = %supply,
                        "Locked balances exceed total supply"
                    );
                }
                Ok(supply)
            }
            Err(e) => {
                metrics::record_computation("failure");
                tracing::error!(error = %e, "Error calculating circulating supply");
                Err(e)
            }
        }
    }

    /// Most recent successful value, if any computation has succeeded.
    pub fn last_known_good(&self) -> Option<CirculatingSupply> {
        self.last_known_good.get()
    }

    pub fn locked_addresses(&self) -> &[Address] {
        &self.locked
    }

    #[cfg(test)]
    fn reader(&self) -> &R {
        &self.reader
    }

    async fn try_compute(&self) -> Result<CirculatingSupply, ComputationError> {
        let total = self
            .reader
            .total_supply()
            .await
            .map_err(ComputationError::TotalSupply)?;
        tracing::debug!(total_supply = %total, "Fetched total supply");

        let readings = self.read_locked_balances().await;
        let locked = sum_readings(&readings);

        Ok(CirculatingSupply::from_parts(total, locked))
    }

    /// Fetch all locked balances concurrently; one reading per address, in
    /// address order.
    async fn read_locked_balances(&self) -> Vec<BalanceReading> {
        join_all(self.locked.iter().map(|&address| async move {
            let result = self.reader.balance_of(address).await;
            BalanceReading { address, result }
        }))
        .await
    }
}

/// Sum the readings, counting failed ones as zero. Summed in 512 bits so
/// several near-`U256::MAX` balances cannot wrap.
fn sum_readings(readings: &[BalanceReading]) -> U512 {
    readings.iter().fold(U512::ZERO, |acc, reading| {
        let balance = match &reading.result {
            Ok(balance) => {
                tracing::debug!(address = %reading.address, balance = %balance, "Fetched locked balance");
                *balance
            }
            Err(e) => {
                metrics::record_locked_balance_failure();
                tracing::warn!(
                    address = %reading.address,
                    error = %e,
                    "Error fetching locked balance, counting it as zero"
                );
                U256::ZERO
            }
        };
        acc + U512::from(balance)
    })
}
