//! # Market Handlers
//!
//! Proxied CoinGecko endpoints. Every handler parses its query string,
//! delegates to [`MarketService`] and relays the upstream JSON as-is.
//!
//! ## Endpoints
//!
//! - `GET /api/coins` - one page of coins by market cap
//! - `GET /api/categories` - all coin categories
//! - `GET /api/filtered-coins` - coins filtered by ids and/or category
//!
//! ## Authentication
//!
//! All three require the `x-api-key` header (see
//! [`crate::middleware::mw_api_key`]).
//!
//! ## Request Examples
//!
//! ```bash
//! curl -H "x-api-key: $API_KEY" "http://localhost:8000/api/coins?page_num=2&per_page=50"
//! curl -H "x-api-key: $API_KEY" "http://localhost:8000/api/filtered-coins?ids=bitcoin,ethereum"
//! curl -H "x-api-key: $API_KEY" "http://localhost:8000/api/filtered-coins?category=stablecoins"
//! ```

use crate::extract::ApiQuery;
use crate::services::MarketService;
use axum::{extract::State, Json};
use lib_core::dto::{CoinsQuery, FilteredCoinsQuery};
use lib_core::Result;
use serde_json::Value;
use std::sync::Arc;

/// **Route**: `GET /api/coins?page_num=1&per_page=10`
pub async fn list_coins(
    State(market): State<Arc<MarketService>>,
    ApiQuery(params): ApiQuery<CoinsQuery>,
) -> Result<Json<Value>> {
    let coins = market.list_coins(params.page_num, params.per_page).await?;
    Ok(Json(coins))
}

/// **Route**: `GET /api/categories`
pub async fn list_categories(State(market): State<Arc<MarketService>>) -> Result<Json<Value>> {
    let categories = market.list_categories().await?;
    Ok(Json(categories))
}

/// **Route**: `GET /api/filtered-coins?ids=&category=&page_num=1&per_page=10`
///
/// Empty `ids`/`category` are not forwarded, so with neither filter this
/// behaves like `/api/coins`.
pub async fn list_filtered_coins(
    State(market): State<Arc<MarketService>>,
    ApiQuery(params): ApiQuery<FilteredCoinsQuery>,
) -> Result<Json<Value>> {
    let coins = market
        .filtered_coins(&params.ids, &params.category, params.page_num, params.per_page)
        .await?;
    Ok(Json(coins))
}
