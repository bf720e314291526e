//! OpenMusic Server Library
//!
//! HTTP surface of the OpenMusic catalog: axum routes, JSON envelopes,
//! error-to-status mapping and JWT identity.
//!
//! This library exposes the router and its building blocks for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::auth::AuthService;
pub use state::AppState;
