//! # CoinGecko Upstream Client
//!
//! The only outbound I/O in the gateway: one GET per call against the
//! configured CoinGecko base URL, with failures normalized into [`AppError`].
//!
//! ## Failure Translation
//!
//! | Upstream outcome | Result |
//! |---|---|
//! | 2xx with a JSON body | `Ok(Value)`, body untouched |
//! | non-2xx, including 3xx | [`AppError::Upstream`] with the same status and raw body |
//! | transport error, timeout, unreadable or non-JSON body | [`AppError::Unexpected`] (500) |
//!
//! Redirects are not followed. There are no retries. Timeouts are whatever
//! `reqwest` defaults to.

use lib_core::{AppError, Result};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// User agent sent upstream.
const USER_AGENT: &str = concat!("market-gateway/", env!("CARGO_PKG_VERSION"));

/// A single upstream call: a fixed path plus optional query parameters.
///
/// Parameters holding `None` are dropped before the request is sent, never
/// serialized as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub path: &'static str,
    pub params: Vec<(&'static str, Option<String>)>,
}

impl UpstreamRequest {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    /// Append a parameter. `None` marks it absent.
    pub fn param(mut self, key: &'static str, value: Option<String>) -> Self {
        self.params.push((key, value));
        self
    }

    /// Parameters that will actually be sent, in insertion order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        self.params
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect()
    }

    /// Value of a present parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_deref())
    }
}

/// HTTP client for the CoinGecko REST API.
///
/// Cheap to clone: `reqwest::Client` is reference-counted and owns the
/// connection pool, so concurrent requests share connections without any
/// shared mutable state of ours.
#[derive(Clone, Debug)]
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a client for `base_url` (e.g. `https://api.coingecko.com/api/v3`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform `request` and return the upstream JSON body unmodified.
    #[instrument(skip(self, request), fields(path = request.path))]
    pub async fn fetch(&self, request: &UpstreamRequest) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        let query = request.query_pairs();

        debug!("[UPSTREAM] GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                warn!("[UPSTREAM] Request to {} failed: {}", url, e);
                AppError::unexpected(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(AppError::unexpected)?;
            warn!("[UPSTREAM] {} answered {}", url, status);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.json::<Value>().await.map_err(|e| {
            warn!("[UPSTREAM] Unreadable body from {}: {}", url, e);
            AppError::unexpected(e)
        })?;

        debug!("[UPSTREAM] {} answered {}", url, status);
        Ok(body)
    }
}
