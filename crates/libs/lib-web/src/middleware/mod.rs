//! # Middleware
//!
//! Axum middleware for API-key checks and request logging.
//!
//! ## Modules
//!
//! - **[`mw_api_key`]**: shared-secret guard for the `/api` routes
//! - **[`mw_logging`]**: request ID stamping and request/response logging

// region: --- Modules
pub mod mw_api_key;
pub mod mw_logging;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_api_key::{require_api_key, API_KEY_HEADER};
pub use mw_logging::log_requests;
// endregion: --- Re-exports
