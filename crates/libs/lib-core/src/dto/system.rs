//! # System DTOs
//!
//! Fixed-shape bodies for the unauthenticated service endpoints and for errors.

use serde::{Deserialize, Serialize};

/// Reported by `GET /version`.
pub const APP_VERSION: &str = "1.0.0";

/// `GET /health` response.
///
/// ```json
/// { "status": "ok" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// `GET /version` response.
///
/// `coingecko_api` is the configured `COINGECKO_API_BASE`, or `"not set"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionResponse {
    pub app_version: String,
    pub coingecko_api: String,
}

/// Error body returned for every failed request.
///
/// ```json
/// { "detail": "Invalid or missing API Key" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_serialization() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[test]
    fn test_error_response_uses_detail_key() {
        let json = serde_json::to_string(&ErrorResponse {
            detail: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"detail":"nope"}"#);
    }
}
