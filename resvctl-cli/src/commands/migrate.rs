//! Apply the database schema and exit

use anyhow::{Context, Result};
use clap::Parser;

use resvctl_server::config::DEFAULT_DATABASE_URL;
use resvctl_server::Store;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = Store::open(&args.database_url)
        .await
        .context("Failed to open database")?;

    let result = store.migrate().await.context("Failed to apply migrations");
    store.close().await;
    result
}
