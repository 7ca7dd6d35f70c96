//! notedrop - save short notes over HTTP, backed by PostgreSQL
//!
//! Usage:
//!   notedrop                          # bind 0.0.0.0:5000, DATABASE_URL from env
//!   notedrop --bind 127.0.0.1:8080
//!   RUST_LOG=notedrop_server=debug notedrop

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notedrop_server::db::DbConfig;
use notedrop_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "notedrop",
    version,
    about = "HTTP service that saves short text messages to PostgreSQL"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:5000")]
    bind: SocketAddr,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let db = DbConfig::new(cli.database_url);
    if !db.is_configured() {
        tracing::warn!("DATABASE_URL not set; data endpoints will answer DB not connected");
    }

    tracing::info!("Starting notedrop server on {}", cli.bind);

    let config = ServerConfig {
        bind_addr: cli.bind,
    };

    run_server(db, config).await.context("Server error")?;

    Ok(())
}
