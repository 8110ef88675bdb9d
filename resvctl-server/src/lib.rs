//! resvctl-server: customer and reservation CRUD over HTTP
//!
//! Three thin layers:
//! - `db`: store handle, schema migrations and per-resource repositories
//! - `models`: validated request input
//! - `http`: axum router, API-key guard, error mapping and server lifecycle

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ApiKey, ServerConfig};
pub use db::{Store, StoreError};
pub use http::{build_router, run_server, AppState};
