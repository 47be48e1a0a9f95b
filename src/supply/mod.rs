//! Circulating supply computation.
//!
//! # Data Flow
//! ```text
//! TokenReader::total_supply()
//!     → fan-out TokenReader::balance_of() over the locked addresses
//!     → BalanceReading per address (value or error)
//!     → fold: failed readings count as zero
//!     → total - locked = CirculatingSupply
//!     → LastKnownGood slot (on success only)
//! ```

pub mod cache;
pub mod calculator;
pub mod types;

pub use cache::LastKnownGood;
pub use calculator::SupplyCalculator;
pub use types::{BalanceReading, CirculatingSupply, ComputationError};
