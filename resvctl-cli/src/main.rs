//! resvctl CLI - runs and maintains the customer/reservation API

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "resvctl",
    author,
    version,
    about = "Customer and reservation CRUD API backed by SQLite"
)]
struct Cli {
    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create or upgrade the database schema, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables take precedence
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}
