//! HTTP server command
//!
//! Runs the customer/reservation API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use resvctl_server::config::DEFAULT_DATABASE_URL;
use resvctl_server::{run_server, ApiKey, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "RESVCTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Pre-shared key clients must send in the X-API-Key header
    #[arg(long, env = "RESVCTL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "RESVCTL_CORS_PERMISSIVE")]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServerConfig> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .context("API key not set. Set via --api-key or RESVCTL_API_KEY")?;

        let mut config = ServerConfig::new(ApiKey::new(api_key));
        config.bind_addr = self.bind;
        config.database_url = self.database_url;
        config.cors_permissive = self.cors_permissive;
        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config()?;

    tracing::info!("Starting resvctl server on {}", config.bind_addr);

    // Blocks until shutdown; the store is closed before this returns
    run_server(config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_key: Option<&str>) -> ServeArgs {
        ServeArgs {
            bind: "127.0.0.1:9000".parse().unwrap(),
            database_url: "sqlite::memory:".into(),
            api_key: api_key.map(str::to_owned),
            cors_permissive: true,
        }
    }

    #[test]
    fn config_from_args() {
        let config = args(Some("k")).into_config().unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.cors_permissive);
        assert!(config.api_key.matches(b"k"));
    }

    #[test]
    fn missing_or_empty_key_is_an_error() {
        assert!(args(None).into_config().is_err());
        assert!(args(Some("")).into_config().is_err());
    }
}
