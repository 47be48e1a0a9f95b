//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, loaded by main)
//!     → process environment / command-line flags
//!     → loader.rs (clap parse into raw Args)
//!     → Settings::try_from (semantic checks)
//!     → Settings (validated, immutable)
//!     → handed by value to the chain reader and HTTP server
//! ```
//!
//! # Design Decisions
//! - Settings are read once at startup and never re-validated per request
//! - Missing token address or API key is fatal before anything binds
//! - The locked address set is a constant, not configuration

pub mod loader;
pub mod schema;

pub use loader::{load_settings, Args, ConfigError};
pub use schema::{Settings, LOCKED_ADDRESSES};
