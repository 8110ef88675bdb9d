//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - API-key middleware on /api routes
//! - Graceful shutdown
//! - JSON error responses

pub mod auth;
pub mod docs;
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
