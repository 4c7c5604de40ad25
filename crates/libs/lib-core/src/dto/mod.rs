//! # Data Transfer Objects (DTOs)
//!
//! Query-string inputs and the small fixed JSON bodies served by the gateway.
//! Proxied market data is relayed as raw `serde_json::Value` and has no DTO.

pub mod market;
pub mod system;

pub use market::*;
pub use system::*;
