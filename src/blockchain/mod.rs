//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Settings (token address, provider URL, timeout)
//!     → client.rs (JSON-RPC provider, ERC-20 bindings, per-call timeout)
//!     → TokenReader (totalSupply / balanceOf)
//!     → supply calculator
//! ```
//!
//! # Constraints
//! - Read-only: no wallet, no transactions
//! - One attempt per call; failures surface immediately
//! - Never log the provider API key

pub mod client;
pub mod types;

pub use client::TokenClient;
pub use types::{BlockchainResult, ProviderError, TokenReader};
