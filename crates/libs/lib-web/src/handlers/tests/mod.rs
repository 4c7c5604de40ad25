//! # Handler Tests
//!
//! Drive the production router with `oneshot`, with the upstream API replaced
//! by a `wiremock` server.

mod system;

use crate::server::{create_router, AppState};
use crate::services::{CoinGeckoClient, MarketService};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_core::Config;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Create test config pointing at `api_base`
pub fn test_config(api_base: &str) -> Config {
    Config {
        coingecko_api_base: Some(api_base.to_string()),
        default_currency: "cad".to_string(),
        api_key: TEST_API_KEY.to_string(),
        api_key_enabled: true,
        api_key_defaulted: false,
    }
}

/// Create test app with the production routes and middleware
pub fn test_app(config: Config) -> Router {
    let client = CoinGeckoClient::new(config.api_base()).expect("Failed to build client");
    let market = MarketService::new(client, config.default_currency.clone());
    create_router(AppState::new(config, market), &[])
}

/// Fail the test on drop if the upstream receives any request at all
pub async fn forbid_upstream_calls(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Send a GET, optionally with an API key, and decode the JSON body
pub async fn get_json(app: Router, uri: &str, api_key: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}
