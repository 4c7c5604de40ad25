//! # Utilities Library
//!
//! Shared helpers for environment variables and query-string text cleanup.

pub mod envs;
pub mod text;

// Re-export commonly used functions
pub use envs::{get_env_opt, get_env_or, get_env_raw, parse_or};
pub use text::{clean_csv, non_blank};
