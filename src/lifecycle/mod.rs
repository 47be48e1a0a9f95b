//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Settings → chain reader → calculator → metrics → bind → serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     broadcast → HTTP server stops accepting → in-flight requests drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: configuration errors never reach startup
//! - The listener binds last, after every subsystem is built
//! - An unreachable provider at startup is logged, not fatal

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
