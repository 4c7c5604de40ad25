//! # HTTP Request Handlers
//!
//! Axum handlers grouped by feature area. Handlers only parse input and call
//! into [`crate::services`]; errors are returned as `lib_core::AppError`, which
//! renders itself as `{"detail": ...}` with the right status.
//!
//! ## Handler Modules
//!
//! - **[`market`]**: proxied CoinGecko data (requires `x-api-key`)
//!   - `GET /api/coins` - paginated coins by market cap
//!   - `GET /api/categories` - coin categories
//!   - `GET /api/filtered-coins` - coins filtered by ids/category
//!
//! - **[`system`]**: service endpoints (public)
//!   - `GET /` - static index page
//!   - `GET /health` - liveness probe
//!   - `GET /version` - version and upstream metadata
//!
//! ## Request/Response Flow
//!
//! ```text
//! Client Request
//!     ↓
//! CORS + TraceLayer (tower-http)
//!     ↓
//! log_requests (request ID, logging)
//!     ↓
//! require_api_key (/api routes only)
//!     ↓
//! Handler → MarketService → CoinGeckoClient
//!     ↓
//! Client Response
//! ```

pub mod market;
pub mod system;

#[cfg(test)]
mod tests;
