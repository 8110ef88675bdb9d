//! Server configuration
//!
//! Populated from the command line / environment by `resvctl serve`.
//! There is exactly one configuration source; the library never reads
//! environment variables itself.

use std::fmt;
use std::net::SocketAddr;

/// Default SQLite database, created next to the working directory if missing.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://resvctl.db?mode=rwc";

/// Header clients use to present the pre-shared API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Pre-shared API key guarding every `/api` route.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Compare against a presented key without short-circuiting on the
    /// first differing byte.
    pub fn matches(&self, presented: &[u8]) -> bool {
        let expected = self.0.as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// sqlx SQLite connection string
    pub database_url: String,

    /// Key required in the `X-API-Key` header
    pub api_key: ApiKey,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl ServerConfig {
    /// Configuration with defaults for everything except the API key,
    /// which has no sensible default.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            api_key,
            cors_permissive: false,
        }
    }
}
