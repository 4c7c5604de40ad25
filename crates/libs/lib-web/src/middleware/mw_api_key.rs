//! # API Key Middleware
//!
//! Shared-secret guard for the proxied `/api` routes.
//!
//! The `x-api-key` header must equal the configured `API_KEY` exactly. A
//! missing header and a wrong key are indistinguishable to the caller: both
//! get `403 {"detail":"Invalid or missing API Key"}` and the request never
//! reaches a handler, so no upstream call is made.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use lib_web::middleware::require_api_key;
//!
//! let api = Router::new()
//!     .route("/coins", get(list_coins))
//!     .route_layer(from_fn_with_state(state.clone(), require_api_key));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use lib_core::{AppError, Config};
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the shared secret. Header names are case-insensitive.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Reject the request with 403 unless `x-api-key` matches the configured key.
///
/// The request passes through unmodified on success.
pub async fn require_api_key(
    State(config): State<Arc<Config>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req.headers().get(API_KEY_HEADER);

    match provided {
        Some(value) if value.as_bytes() == config.api_key.as_bytes() => {
            debug!("[AUTH] API key accepted for {}", req.uri().path());
            Ok(next.run(req).await)
        }
        Some(_) => {
            warn!("[AUTH] Wrong API key for {}", req.uri().path());
            Err(AppError::Forbidden)
        }
        None => {
            warn!("[AUTH] Missing API key for {}", req.uri().path());
            Err(AppError::Forbidden)
        }
    }
}
