//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, request ID, trace layer)
//!     → GET / handler (one computation attempt per request)
//!     → response.rs (fresh value, stale fallback, or fixed error)
//!     → plain-text response to client
//! ```

pub mod response;
pub mod server;

pub use response::{SupplyResponse, UNAVAILABLE_MESSAGE};
pub use server::{AppState, HttpServer};
