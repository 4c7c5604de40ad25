//! # Services Layer
//!
//! Business logic between the HTTP handlers and the upstream API:
//!
//! ```text
//! Handlers (HTTP) → MarketService (request building) → CoinGeckoClient (I/O)
//! ```
//!
//! - [`coingecko`] - upstream client and request descriptor
//! - [`market`] - the three proxied market-data operations
//!
//! All services return `lib_core::Result<T>`; upstream failures are translated
//! once in [`coingecko`] and passed through unchanged.

pub mod coingecko;
pub mod market;

// Re-export services for convenience
pub use coingecko::{CoinGeckoClient, UpstreamRequest};
pub use market::MarketService;
