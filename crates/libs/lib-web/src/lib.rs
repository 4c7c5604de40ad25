//! # Web Library
//!
//! HTTP handlers, middleware, upstream services and server setup for the
//! crypto market gateway.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;

pub use server::{create_router, start_server, AppState, ServerConfig};
