//! # Core Library
//!
//! Configuration, error type and wire DTOs shared by the gateway crates.

pub mod config;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
