//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! [`start_server`] loads and validates [`Config`], builds the upstream client,
//! wires the router and serves until Ctrl-C. [`create_router`] is public so
//! tests can drive the exact production router with `tower::ServiceExt`.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, require_api_key, API_KEY_HEADER};
use crate::services::{CoinGeckoClient, MarketService};
use axum::{
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use lib_core::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
///
/// Immutable after startup; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub market: Arc<MarketService>,
}

impl AppState {
    pub fn new(config: Config, market: MarketService) -> Self {
        Self {
            config: Arc::new(config),
            market: Arc::new(market),
        }
    }
}

impl axum::extract::FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<MarketService> {
    fn from_ref(state: &AppState) -> Self {
        state.market.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Listener and CORS settings.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: SocketAddr,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8000".to_string(),
                "http://127.0.0.1:8000".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDRESS` and `CORS_ALLOWED_ORIGINS`, keeping defaults for unset values.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(lib_utils::get_env_opt)
    }

    /// Build listener settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address =
            lib_utils::parse_or("BIND_ADDRESS", lookup("BIND_ADDRESS"), defaults.bind_address)?;

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .and_then(|raw| lib_utils::clean_csv(&raw))
            .map(|origins| origins.split(',').map(str::to_string).collect())
            .unwrap_or(defaults.allowed_origins);

        Ok(Self {
            bind_address,
            allowed_origins,
        })
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize the global tracing subscriber from `LOG_LEVEL` (default `info`).
///
/// `RUST_LOG`, when set, takes precedence for per-module filtering.
pub fn init_tracing() -> anyhow::Result<String> {
    let log_level = lib_utils::get_env_or("LOG_LEVEL", "info").to_lowercase();

    let level = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => log_level.as_str(),
        _ => "info",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    Ok(level.to_string())
}

/// Initialize and start the HTTP server.
///
/// # Errors
///
/// This function will return an error if:
/// - The tracing subscriber is already installed
/// - Configuration loading or validation fails
/// - The HTTP client cannot be built
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let log_level = init_tracing()?;

    info!(" CRYPTO MARKET GATEWAY STARTING");
    info!(" Log level: {}", log_level);

    info!("Loading configuration...");
    let app_config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    app_config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!(" Upstream: {}", app_config.api_base());
    info!(" Default currency: {}", app_config.default_currency);
    info!(
        " API key guard: {}",
        if app_config.api_key_enabled { "enabled" } else { "DISABLED" }
    );

    let upstream = CoinGeckoClient::new(app_config.api_base())?;
    let market = MarketService::new(upstream, app_config.default_currency.clone());
    let state = AppState::new(app_config, market);

    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(" Server stopped");
    Ok(())
}

/// Create the main application router with all routes.
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)]);

    info!("[ROUTE SETUP] Registering HTTP routes...");
    let mut api = Router::new()
        .route("/coins", get(handlers::market::list_coins))
        .route("/categories", get(handlers::market::list_categories))
        .route("/filtered-coins", get(handlers::market::list_filtered_coins));

    // route_layer: unmatched /api paths still fall through to the 404 handler
    if state.config.api_key_enabled {
        api = api.route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));
    }

    Router::new()
        .route("/", get(handlers::system::index))
        .route("/health", get(handlers::system::health))
        .route("/version", get(handlers::system::version))
        .nest("/api", api)
        .fallback(handlers::system::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                },
            ),
        )
        .layer(cors)
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(" Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Log server information
fn log_server_info() {
    info!(" SERVICE:");
    info!("   • GET  /");
    info!("   • GET  /health");
    info!("   • GET  /version");
    info!(" MARKET DATA (x-api-key):");
    info!("   • GET  /api/coins?page_num=1&per_page=10");
    info!("   • GET  /api/categories");
    info!("   • GET  /api/filtered-coins?ids={{ids}}&category={{category}}&page_num=1&per_page=10");
}
// endregion: --- Server Setup
