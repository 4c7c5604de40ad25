//! # Market Query DTOs
//!
//! Query-string parameters accepted by the proxied `/api` routes.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET /api/coins?page_num=1&per_page=10` - [`CoinsQuery`]
//! - `GET /api/filtered-coins?ids=bitcoin,ethereum&category=&page_num=1&per_page=10` - [`FilteredCoinsQuery`]
//!
//! Every field has a default, so an empty query string is always accepted.
//! Page values are not range-checked here; the upstream API rejects values it
//! does not like and that rejection is relayed to the caller.

use serde::Deserialize;

/// Default `page_num` when the query string omits it.
pub const DEFAULT_PAGE: i64 = 1;

/// Default `per_page` when the query string omits it.
pub const DEFAULT_PER_PAGE: i64 = 10;

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

/// Pagination for `GET /api/coins`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CoinsQuery {
    #[serde(default = "default_page")]
    pub page_num: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

/// Filters and pagination for `GET /api/filtered-coins`.
///
/// `ids` is a free-form comma-separated list (`"bitcoin, ethereum,"` is fine);
/// cleanup happens in the market service, not here.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FilteredCoinsQuery {
    #[serde(default)]
    pub ids: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_page")]
    pub page_num: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}
