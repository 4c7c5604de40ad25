//! # Application Configuration
//!
//! Gateway configuration loaded from environment variables once at startup.
//! All values are validated before the server binds, so a misconfigured
//! deployment fails fast instead of at the first proxied request.
//!
//! The resulting [`Config`] is immutable and handed to the upstream client and
//! the API-key guard through router state; nothing reads the environment after
//! startup.
//!
//! ```rust,no_run
//! use lib_core::Config;
//!
//! let config = Config::from_env()?;
//! config.validate()?;
//! println!("proxying {}", config.api_base());
//! # Ok::<(), String>(())
//! ```

use tracing::warn;

/// Upstream base URL used when `COINGECKO_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Quote currency used when `DEFAULT_CURRENCY` is not set.
pub const DEFAULT_CURRENCY: &str = "cad";

/// Shared secret used when `API_KEY` is not set.
///
/// Kept for drop-in compatibility with existing clients. Startup logs a
/// warning whenever the gateway runs with it.
pub const DEFAULT_API_KEY: &str = "supersecretkey";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Raw `COINGECKO_API_BASE` value, `None` when unset.
    ///
    /// Kept separately from the effective base URL because `/version`
    /// reports whether the variable was configured.
    pub coingecko_api_base: Option<String>,

    /// `vs_currency` sent with every markets request
    pub default_currency: String,

    /// Shared secret compared against the `x-api-key` header
    pub api_key: String,

    /// Whether the API-key guard is layered on the `/api` routes
    pub api_key_enabled: bool,

    /// True when `api_key` fell back to [`DEFAULT_API_KEY`]
    pub api_key_defaulted: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(lib_utils::get_env_raw)
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// `lookup` returns `None` for unset variables. A blank `API_KEY` or
    /// `DEFAULT_CURRENCY` is kept as-is so [`Config::validate`] rejects it;
    /// the other variables treat blank as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let coingecko_api_base =
            lookup("COINGECKO_API_BASE").and_then(|raw| lib_utils::non_blank(&raw));

        let default_currency =
            lookup("DEFAULT_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let (api_key, api_key_defaulted) = match lookup("API_KEY") {
            Some(key) => (key, false),
            None => (DEFAULT_API_KEY.to_string(), true),
        };

        let enabled_flag = lookup("API_KEY_ENABLED").and_then(|raw| lib_utils::non_blank(&raw));
        let api_key_enabled = match enabled_flag {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| format!("API_KEY_ENABLED must be true or false, got '{}'", raw))?,
            None => true,
        };

        Ok(Self {
            coingecko_api_base,
            default_currency,
            api_key,
            api_key_enabled,
            api_key_defaulted,
        })
    }

    /// Effective upstream base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.coingecko_api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        let base = self.api_base();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(format!(
                "COINGECKO_API_BASE must be an http(s) URL, got '{}'",
                base
            ));
        }

        if self.default_currency.trim().is_empty() {
            return Err("DEFAULT_CURRENCY cannot be empty".to_string());
        }

        if self.api_key_enabled && self.api_key.trim().is_empty() {
            return Err("API_KEY cannot be empty while API_KEY_ENABLED is true".to_string());
        }

        if self.api_key_enabled && self.api_key_defaulted {
            warn!("API_KEY is not set; the /api routes are guarded by the built-in default key");
        }

        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
