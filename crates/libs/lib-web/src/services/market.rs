//! # Market Service
//!
//! Builds CoinGecko requests for the three proxied operations and delegates
//! them to [`CoinGeckoClient`]. No validation, no caching, no reshaping: what
//! the upstream returns is what the caller gets.
//!
//! ```text
//! list_coins      → GET /coins/markets          (vs_currency, order, per_page, page)
//! list_categories → GET /coins/categories/list  ()
//! filtered_coins  → GET /coins/markets          (vs_currency, ids?, category?, order, per_page, page)
//! ```

use lib_core::Result;
use lib_utils::{clean_csv, non_blank};
use serde_json::Value;
use tracing::{info, instrument};

use super::coingecko::{CoinGeckoClient, UpstreamRequest};

pub const MARKETS_PATH: &str = "/coins/markets";
pub const CATEGORIES_PATH: &str = "/coins/categories/list";
pub const MARKET_CAP_DESC: &str = "market_cap_desc";

/// Request for one page of coins ordered by market cap.
pub fn list_coins_request(currency: &str, page: i64, per_page: i64) -> UpstreamRequest {
    UpstreamRequest::new(MARKETS_PATH)
        .param("vs_currency", Some(currency.to_string()))
        .param("order", Some(MARKET_CAP_DESC.to_string()))
        .param("per_page", Some(per_page.to_string()))
        .param("page", Some(page.to_string()))
}

/// Request for the full category list.
pub fn categories_request() -> UpstreamRequest {
    UpstreamRequest::new(CATEGORIES_PATH)
}

/// Request for coins filtered by id list and/or category.
///
/// `ids` is cleaned (segments trimmed, empties dropped); an empty result and a
/// blank `category` are both omitted from the request.
pub fn filtered_coins_request(
    currency: &str,
    ids: &str,
    category: &str,
    page: i64,
    per_page: i64,
) -> UpstreamRequest {
    UpstreamRequest::new(MARKETS_PATH)
        .param("vs_currency", Some(currency.to_string()))
        .param("ids", clean_csv(ids))
        .param("category", non_blank(category))
        .param("order", Some(MARKET_CAP_DESC.to_string()))
        .param("per_page", Some(per_page.to_string()))
        .param("page", Some(page.to_string()))
}

/// Service for the proxied market-data operations.
pub struct MarketService {
    client: CoinGeckoClient,
    default_currency: String,
}

impl MarketService {
    pub fn new(client: CoinGeckoClient, default_currency: impl Into<String>) -> Self {
        Self {
            client,
            default_currency: default_currency.into(),
        }
    }

    /// One page of coins sorted by market cap, priced in the default currency.
    #[instrument(skip(self))]
    pub async fn list_coins(&self, page: i64, per_page: i64) -> Result<Value> {
        info!("[MARKET] Listing coins page={} per_page={}", page, per_page);
        let request = list_coins_request(&self.default_currency, page, per_page);
        self.client.fetch(&request).await
    }

    /// All coin categories known upstream.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Value> {
        info!("[MARKET] Listing categories");
        self.client.fetch(&categories_request()).await
    }

    /// Coins filtered by `ids` and/or `category`, with pagination.
    #[instrument(skip(self))]
    pub async fn filtered_coins(
        &self,
        ids: &str,
        category: &str,
        page: i64,
        per_page: i64,
    ) -> Result<Value> {
        let request =
            filtered_coins_request(&self.default_currency, ids, category, page, per_page);
        info!(
            "[MARKET] Filtering coins ids={:?} category={:?} page={} per_page={}",
            request.get("ids"),
            request.get("category"),
            page,
            per_page
        );
        self.client.fetch(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::AppError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> MarketService {
        MarketService::new(CoinGeckoClient::new(server.uri()).unwrap(), "cad")
    }

    #[test]
    fn test_list_coins_request_params() {
        let request = list_coins_request("cad", 3, 25);

        assert_eq!(request.path, "/coins/markets");
        assert_eq!(
            request.query_pairs(),
            vec![
                ("vs_currency", "cad"),
                ("order", "market_cap_desc"),
                ("per_page", "25"),
                ("page", "3"),
            ]
        );
    }

    #[test]
    fn test_categories_request_has_no_params() {
        let request = categories_request();
        assert_eq!(request.path, "/coins/categories/list");
        assert!(request.query_pairs().is_empty());
    }

    #[test]
    fn test_filtered_request_cleans_ids() {
        let request = filtered_coins_request("cad", "bitcoin, , ethereum,", "", 1, 10);
        assert_eq!(request.get("ids"), Some("bitcoin,ethereum"));
        assert_eq!(request.get("category"), None);
    }

    #[test]
    fn test_filtered_request_omits_blank_filters() {
        let request = filtered_coins_request("usd", " , ", "   ", 2, 5);
        let keys: Vec<&str> = request.query_pairs().iter().map(|(k, _)| *k).collect();

        assert_eq!(keys, vec!["vs_currency", "order", "per_page", "page"]);
    }

    #[test]
    fn test_filtered_request_single_id() {
        let request = filtered_coins_request("cad", "bitcoin", "", 1, 10);

        assert_eq!(
            request.query_pairs(),
            vec![
                ("vs_currency", "cad"),
                ("ids", "bitcoin"),
                ("order", "market_cap_desc"),
                ("per_page", "10"),
                ("page", "1"),
            ]
        );
    }

    #[test]
    fn test_filtered_request_keeps_category() {
        let request = filtered_coins_request("cad", "", "stablecoins", 1, 10);
        assert_eq!(request.get("category"), Some("stablecoins"));
        assert_eq!(request.get("ids"), None);
    }

    #[tokio::test]
    async fn test_list_coins_round_trip() {
        let server = MockServer::start().await;
        let coins = json!([{ "id": "bitcoin" }, { "id": "ethereum" }]);

        Mock::given(method("GET"))
            .and(path("/coins/markets"))
            .and(query_param("vs_currency", "cad"))
            .and(query_param("order", "market_cap_desc"))
            .and(query_param("per_page", "2"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(coins.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let body = service(&server).list_coins(1, 2).await.unwrap();

        assert_eq!(body, coins);
        assert_eq!(body[0]["id"], "bitcoin");
    }

    #[tokio::test]
    async fn test_filtered_coins_sends_exact_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/coins/markets"))
            .and(query_param("vs_currency", "cad"))
            .and(query_param("ids", "bitcoin"))
            .and(query_param("order", "market_cap_desc"))
            .and(query_param("per_page", "10"))
            .and(query_param("page", "1"))
            .and(query_param_is_missing("category"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "bitcoin" }])))
            .expect(1)
            .mount(&server)
            .await;

        let body = service(&server)
            .filtered_coins("bitcoin", "", 1, 10)
            .await
            .unwrap();
        assert_eq!(body, json!([{ "id": "bitcoin" }]));
    }

    #[tokio::test]
    async fn test_list_categories() {
        let server = MockServer::start().await;
        let categories = json!([{ "category_id": "stablecoins", "name": "Stablecoins" }]);

        Mock::given(method("GET"))
            .and(path("/coins/categories/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let body = service(&server).list_categories().await.unwrap();
        assert_eq!(body, categories);
    }

    #[tokio::test]
    async fn test_rate_limit_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/coins/markets"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({ "error": "Too many requests" })),
            )
            .mount(&server)
            .await;

        let err = service(&server).list_coins(1, 2).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream { status: 429, .. }));
        let detail: Value = serde_json::from_str(&err.detail()).unwrap();
        assert_eq!(detail, json!({ "error": "Too many requests" }));
    }
}
